//! Example: Vertical height picker
//!
//! What it demonstrates
//! - Embedding the ruler through `RulerApp`/`run_ruler` with a vertical scale.
//! - Registering the selection handler and logging `(index, value)` changes.
//! - Forcing a starting selection before the first frame.
//!
//! How to run
//! ```bash
//! cargo run --example height_picker
//! ```
//! Drag or fling the ruler; the heading shows the selected height in cm.

use rulerpick::{Orientation, RulerApp, RulerConfig, RulerStyle};

fn main() -> eframe::Result<()> {
    // 0..=240 cm, a long tick plus label every 10
    let config = RulerConfig::default()
        .with_orientation(Orientation::Vertical)
        .with_range(0, 240)
        .with_major_every(10)
        .with_step_value(10);

    let inner_size = eframe::egui::Vec2::new(240.0, 640.0);
    let opts = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size(inner_size),
        ..Default::default()
    };
    eframe::run_native(
        "Height picker",
        opts,
        Box::new(move |_cc| {
            let mut app = RulerApp::new(config, RulerStyle::default())?.with_unit("cm");
            app.state_mut().on_change(|change| {
                eprintln!("selection changed: index == {} value == {}", change.index, change.value);
            });
            // Start at 170 cm instead of the bottom of the scale
            let cfg = app.config().clone();
            app.state_mut().set_current_line(&cfg, 170);
            Ok(Box::new(app))
        }),
    )
}
