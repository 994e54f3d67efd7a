//! Example: Horizontal weight picker
//!
//! What it demonstrates
//! - A horizontal ruler (labels along the bottom, marker pointing down).
//! - Custom styling: dark body, amber highlight.
//! - Reading the settled value back from `RulerState` via the change handler.
//!
//! How to run
//! ```bash
//! cargo run --example weight_picker
//! ```

use eframe::egui::Color32;
use rulerpick::{run_ruler, Orientation, RulerConfig, RulerStyle};

fn main() -> eframe::Result<()> {
    // 0..=150 kg, one labeled tick per 10 kg
    let config = RulerConfig::default()
        .with_orientation(Orientation::Horizontal)
        .with_range(0, 150)
        .with_major_every(10)
        .with_step_value(10)
        .with_space(9.0);

    let style = RulerStyle::default()
        .with_background(Color32::from_rgb(0x20, 0x24, 0x28))
        .with_line_color(Color32::from_gray(0xd0))
        .with_highlight_color(Color32::from_rgb(0xff, 0xb3, 0x00))
        .with_marker_color(Color32::from_rgb(0xff, 0xb3, 0x00));

    run_ruler(config, style)
}
