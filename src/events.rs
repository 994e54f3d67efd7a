//! Selection-change notification.
//!
//! The ruler has a single consumer: the host that embeds it. Notification is
//! therefore one optional handler slot, not a subscriber list — register a
//! closure with [`RulerState::on_change`](crate::RulerState::on_change) and
//! it is invoked with the settled `(index, value)` whenever the selected
//! tick changes.

/// Payload handed to the selection handler.
///
/// `index` counts from the first tick (`0` = `start_line`); `value` is the
/// mapped human-facing measurement for that tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub index: u32,
    pub value: u32,
}

pub(crate) type ChangeHandler = Box<dyn FnMut(SelectionChange) + 'static>;

/// The single registered-handler slot.
#[derive(Default)]
pub(crate) struct HandlerSlot {
    handler: Option<ChangeHandler>,
}

impl HandlerSlot {
    /// Register a handler, replacing any previous one.
    pub(crate) fn set(&mut self, handler: impl FnMut(SelectionChange) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    pub(crate) fn clear(&mut self) {
        self.handler = None;
    }

    pub(crate) fn emit(&mut self, change: SelectionChange) {
        if let Some(handler) = self.handler.as_mut() {
            handler(change);
        }
    }
}

impl std::fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSlot")
            .field("registered", &self.handler.is_some())
            .finish()
    }
}
