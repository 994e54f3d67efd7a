//! The ruler widget: sizing, input handling and painting.

use eframe::egui::{
    Align2, CornerRadius, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, Widget,
};

use crate::buffer::LineBuffer;
use crate::config::{ConfigError, Orientation, RulerConfig, RulerStyle};
use crate::events::{HandlerSlot, SelectionChange};
use crate::mapping;
use crate::scroll::{GesturePhase, ScrollState};

// ─────────────────────────────────────────────────────────────────────────────
// RulerState
// ─────────────────────────────────────────────────────────────────────────────

/// Retained widget state, owned by the host between frames.
///
/// Holds the scroll offset and gesture phase, the settled selection, the
/// reusable tick draw buffer and the optional selection handler. All offset
/// mutation goes through [`ScrollState`]'s transition methods, which keep the
/// offset inside the configured tick range.
#[derive(Debug)]
pub struct RulerState {
    /// Scroll offset + gesture phase. Public so headless hosts and tests can
    /// drive gestures directly; the invariants live in its methods.
    pub scroll: ScrollState,
    current_line: u32,
    buffer: LineBuffer,
    handler: HandlerSlot,
}

impl RulerState {
    /// Validating constructor; the state starts at rest on `start_line`.
    pub fn new(cfg: &RulerConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            scroll: ScrollState::new(cfg),
            current_line: cfg.start_line,
            buffer: LineBuffer::default(),
            handler: HandlerSlot::default(),
        })
    }

    /// The settled tick index (absolute, `start_line ..= lines`).
    pub fn current_line(&self) -> u32 {
        self.current_line
    }

    /// The selection as an index counting from the first tick.
    pub fn current_index(&self, cfg: &RulerConfig) -> u32 {
        self.current_line - cfg.start_line
    }

    /// The mapped human-facing value of the current selection.
    pub fn current_value(&self, cfg: &RulerConfig) -> u32 {
        mapping::value_for_line(cfg, self.current_line)
    }

    /// Force the selection to `line` (clamped), parking the scroll exactly
    /// on that tick and notifying the handler if the selection changed.
    pub fn set_current_line(&mut self, cfg: &RulerConfig, line: u32) {
        self.scroll.jump_to_line(cfg, line);
        self.sync_selection(cfg);
    }

    /// Register the selection-changed handler (at most one; replaces any
    /// previous handler).
    pub fn on_change(&mut self, handler: impl FnMut(SelectionChange) + 'static) {
        self.handler.set(handler);
    }

    pub fn clear_on_change(&mut self) {
        self.handler.clear();
    }

    /// Recompute the selection from the scroll offset, clamp it and notify
    /// the handler on change. Runs every frame, during drags as well as at
    /// settle time. Returns whether the selection changed.
    pub fn sync_selection(&mut self, cfg: &RulerConfig) -> bool {
        let line = mapping::line_for_offset(cfg, self.scroll.offset);
        if line == self.current_line {
            return false;
        }
        self.current_line = line;
        self.handler.emit(SelectionChange {
            index: line - cfg.start_line,
            value: mapping::value_for_line(cfg, line),
        });
        true
    }

    pub fn phase(&self) -> GesturePhase {
        self.scroll.phase
    }

    pub fn offset(&self) -> f32 {
        self.scroll.offset
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ruler widget
// ─────────────────────────────────────────────────────────────────────────────

/// The ruler widget for one frame.
///
/// Borrow the retained [`RulerState`] and the immutable [`RulerConfig`],
/// optionally override the [`RulerStyle`], and add it like any other widget:
///
/// ```no_run
/// # use rulerpick::{Ruler, RulerConfig, RulerState};
/// # fn show(ui: &mut eframe::egui::Ui, state: &mut RulerState, config: &RulerConfig) {
/// let response = ui.add(Ruler::new(state, config));
/// if response.changed() {
///     // selection moved this frame
/// }
/// # }
/// ```
pub struct Ruler<'a> {
    state: &'a mut RulerState,
    config: &'a RulerConfig,
    style: RulerStyle,
}

impl<'a> Ruler<'a> {
    pub fn new(state: &'a mut RulerState, config: &'a RulerConfig) -> Self {
        Self {
            state,
            config,
            style: RulerStyle::default(),
        }
    }

    pub fn style(mut self, style: RulerStyle) -> Self {
        self.style = style;
        self
    }

    /// Natural size of the full ruler: the whole tick range along the scroll
    /// axis, labels + ticks + marker across it. Hosts that want the widget
    /// unscrolled can allocate exactly this.
    pub fn natural_size(&self, ui: &Ui) -> Vec2 {
        let content = self.config.lines as f32 * self.config.space;
        match self.config.orientation {
            Orientation::Vertical => Vec2::new(self.cross_extent(ui), content),
            Orientation::Horizontal => Vec2::new(content, self.cross_extent(ui)),
        }
    }

    fn cross_extent(&self, ui: &Ui) -> f32 {
        match self.config.orientation {
            Orientation::Vertical => {
                self.max_label_width(ui)
                    + self.style.long_line
                    + self.style.marker_space
                    + self.style.marker_size
            }
            Orientation::Horizontal => {
                self.style.text_size
                    + self.style.long_line
                    + self.style.marker_space
                    + self.style.marker_size
            }
        }
    }

    /// Size the widget asks for: everything the host grants along the scroll
    /// axis (the content scrolls rather than resizes), the natural extent of
    /// labels + ticks + marker across it.
    fn desired_size(&self, ui: &Ui) -> Vec2 {
        match self.config.orientation {
            Orientation::Vertical => Vec2::new(self.cross_extent(ui), ui.available_height()),
            Orientation::Horizontal => Vec2::new(ui.available_width(), self.cross_extent(ui)),
        }
    }

    /// Width of the widest major-tick label (the last one; labels grow
    /// monotonically along the ruler).
    fn max_label_width(&self, ui: &Ui) -> f32 {
        let cfg = self.config;
        let majors = (cfg.start_line..=cfg.lines)
            .filter(|i| i % cfg.major_every == 0)
            .count() as u32;
        if majors == 0 {
            return 0.0;
        }
        let widest = (cfg.start_line + majors - 1) * cfg.step_value;
        let font = FontId::proportional(self.style.text_size);
        ui.fonts_mut(|fonts| {
            fonts
                .layout_no_wrap(widest.to_string(), font, self.style.text_color)
                .size()
                .x
        })
    }
}

impl Widget for Ruler<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired = self.desired_size(ui);
        let max_label_width = match self.config.orientation {
            Orientation::Vertical => self.max_label_width(ui),
            Orientation::Horizontal => 0.0,
        };
        let Ruler { state, config, style } = self;
        let (rect, mut response) = ui.allocate_exact_size(desired, Sense::drag());

        // Pressing the ruler grabs it, cancelling any in-flight animation.
        if response.drag_started() {
            state.scroll.begin_drag();
        }
        if response.dragged() {
            let delta = mapping::axis_delta(config.orientation, response.drag_delta());
            if delta != 0.0 {
                state.scroll.drag_by(config, delta);
            }
        }
        if response.drag_stopped() {
            let velocity = ui.input(|i| i.pointer.velocity());
            state
                .scroll
                .end_drag(config, mapping::axis_delta(config.orientation, velocity));
        }

        if state.scroll.is_animating() {
            let dt = ui.input(|i| i.stable_dt).min(0.1);
            state.scroll.tick(config, dt);
            ui.ctx().request_repaint();
        }

        // The highlighted tick tracks the offset continuously, not only at
        // settle time.
        if state.sync_selection(config) {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, CornerRadius::ZERO, style.background);
            match config.orientation {
                Orientation::Vertical => paint_vertical(
                    &painter, rect, config, &style, state, max_label_width,
                ),
                Orientation::Horizontal => paint_horizontal(&painter, rect, config, &style, state),
            }
        }

        response
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Painting
// ─────────────────────────────────────────────────────────────────────────────

fn paint_vertical(
    painter: &eframe::egui::Painter,
    rect: Rect,
    cfg: &RulerConfig,
    style: &RulerStyle,
    state: &mut RulerState,
    max_label_width: f32,
) {
    let offset = state.scroll.offset;
    let center_y = rect.center().y;
    let left = rect.left();
    let tick_x = left + max_label_width;
    let font = FontId::proportional(style.text_size);

    state.buffer.reset(cfg.tick_count());
    let mut major_seen = 0u32;
    for i in cfg.start_line..=cfg.lines {
        let y = mapping::tick_screen_pos(cfg, center_y, offset, i);
        let length = if i % cfg.major_every == 0 {
            let label = (cfg.start_line + major_seen) * cfg.step_value;
            major_seen += 1;
            painter.text(
                Pos2::new(left + max_label_width * 0.5, y),
                Align2::CENTER_CENTER,
                label.to_string(),
                font.clone(),
                style.text_color,
            );
            style.long_line
        } else {
            style.short_line
        };
        state
            .buffer
            .push(Pos2::new(tick_x, y), Pos2::new(tick_x + length, y));
    }

    paint_tick_buffer(painter, &state.buffer, style);

    // Selected tick redrawn with the highlight stroke.
    let current = state.current_line();
    let y = mapping::tick_screen_pos(cfg, center_y, offset, current);
    let length = if current % cfg.major_every == 0 {
        style.long_line
    } else {
        style.short_line
    };
    painter.line_segment(
        [Pos2::new(tick_x, y), Pos2::new(tick_x + length, y)],
        Stroke::new(style.highlight_width, style.highlight_color),
    );

    // Marker triangle, fixed at the viewport center, pointing at the ticks.
    let apex = Pos2::new(tick_x + style.long_line + style.marker_space, center_y);
    let base_x = apex.x + style.marker_size;
    painter.add(Shape::convex_polygon(
        vec![
            apex,
            Pos2::new(base_x, center_y - style.marker_size),
            Pos2::new(base_x, center_y + style.marker_size),
        ],
        style.marker_color,
        Stroke::NONE,
    ));
}

fn paint_horizontal(
    painter: &eframe::egui::Painter,
    rect: Rect,
    cfg: &RulerConfig,
    style: &RulerStyle,
    state: &mut RulerState,
) {
    let offset = state.scroll.offset;
    let center_x = rect.center().x;
    let bottom = rect.bottom();
    let tick_y = bottom - style.text_size;
    let font = FontId::proportional(style.text_size);

    state.buffer.reset(cfg.tick_count());
    let mut major_seen = 0u32;
    for i in cfg.start_line..=cfg.lines {
        let x = mapping::tick_screen_pos(cfg, center_x, offset, i);
        let length = if i % cfg.major_every == 0 {
            let label = (cfg.start_line + major_seen) * cfg.step_value;
            major_seen += 1;
            painter.text(
                Pos2::new(x, bottom),
                Align2::CENTER_BOTTOM,
                label.to_string(),
                font.clone(),
                style.text_color,
            );
            style.long_line
        } else {
            style.short_line
        };
        state
            .buffer
            .push(Pos2::new(x, tick_y), Pos2::new(x, tick_y - length));
    }

    paint_tick_buffer(painter, &state.buffer, style);

    let current = state.current_line();
    let x = mapping::tick_screen_pos(cfg, center_x, offset, current);
    let length = if current % cfg.major_every == 0 {
        style.long_line
    } else {
        style.short_line
    };
    painter.line_segment(
        [Pos2::new(x, tick_y), Pos2::new(x, tick_y - length)],
        Stroke::new(style.highlight_width, style.highlight_color),
    );

    // Marker triangle above the ticks, apex pointing down at them.
    let apex = Pos2::new(center_x, tick_y - style.long_line - style.marker_space);
    let base_y = apex.y - style.marker_size;
    painter.add(Shape::convex_polygon(
        vec![
            apex,
            Pos2::new(center_x - style.marker_size, base_y),
            Pos2::new(center_x + style.marker_size, base_y),
        ],
        style.marker_color,
        Stroke::NONE,
    ));
}

/// One batched draw of every ordinary tick segment.
fn paint_tick_buffer(painter: &eframe::egui::Painter, buffer: &LineBuffer, style: &RulerStyle) {
    let stroke = Stroke::new(style.line_width, style.line_color);
    painter.extend(
        buffer
            .segments()
            .map(|(a, b)| Shape::line_segment([a, b], stroke)),
    );
}
