//! Ready-to-run native window hosting a single ruler.
//!
//! Most hosts embed [`Ruler`](crate::Ruler) in their own UI; [`run_ruler`]
//! is the shortcut for tools and demos that just want a picker window with
//! a live value readout.

use eframe::egui;

use crate::config::{ConfigError, Orientation, RulerConfig, RulerStyle};
use crate::ruler::{Ruler, RulerState};

/// An [`eframe::App`] wrapping one ruler and a value readout.
pub struct RulerApp {
    config: RulerConfig,
    style: RulerStyle,
    unit: String,
    state: RulerState,
}

impl RulerApp {
    pub fn new(config: RulerConfig, style: RulerStyle) -> Result<Self, ConfigError> {
        let state = RulerState::new(&config)?;
        Ok(Self {
            config,
            style,
            unit: String::new(),
            state,
        })
    }

    /// Unit label appended to the readout (e.g. "cm", "kg").
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Access the retained widget state (e.g. to register a selection
    /// handler or force a starting value before the first frame).
    pub fn state_mut(&mut self) -> &mut RulerState {
        &mut self.state
    }

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }
}

impl eframe::App for RulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let value = self.state.current_value(&self.config);
            ui.heading(format!("{} {}", value, self.unit).trim());
            ui.separator();
            ui.add(Ruler::new(&mut self.state, &self.config).style(self.style.clone()));
        });
    }
}

/// Launch a ruler picker in a native window.
///
/// This is the main entry point for standalone use. It constructs a
/// [`RulerApp`] (validating the config), opens a native window sized to the
/// orientation, and enters the eframe event loop. The call blocks until the
/// window is closed.
pub fn run_ruler(config: RulerConfig, style: RulerStyle) -> eframe::Result<()> {
    let inner_size = match config.orientation {
        Orientation::Vertical => egui::Vec2::new(240.0, 640.0),
        Orientation::Horizontal => egui::Vec2::new(640.0, 180.0),
    };
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(inner_size),
        ..Default::default()
    };
    eframe::run_native(
        "Ruler",
        opts,
        Box::new(move |_cc| Ok(Box::new(RulerApp::new(config, style)?))),
    )
}
