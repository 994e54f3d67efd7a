//! Rulerpick crate root: re-exports and module wiring.
//!
//! This crate provides a scrollable ruler widget for egui/eframe, the kind
//! used to pick a height or weight by dragging a graduated scale past a
//! fixed marker. It supports:
//! - vertical and horizontal orientation
//! - drag scrolling with hard clamping at both ends of the scale
//! - fling (velocity-driven deceleration) followed by snap-to-tick
//! - a single selection-changed handler invoked with `(index, value)`
//!
//! The implementation is split into cohesive modules:
//! - `config`: immutable tick geometry, physics and styling configuration
//! - `mapping`: offset ↔ tick index ↔ value math shared by input and paint
//! - `scroll`: the drag/fling/snap gesture state machine
//! - `buffer`: the reusable flat segment buffer for batched tick drawing
//! - `events`: the selection-changed payload and handler slot
//! - `ruler`: the egui widget itself
//! - `app`: a ready-to-run native window hosting one ruler

pub mod buffer;
pub mod config;
pub mod events;
pub mod mapping;
pub mod ruler;
pub mod scroll;

mod app;

// Public re-exports for a compact external API
pub use app::{run_ruler, RulerApp};
pub use config::{ConfigError, Orientation, RulerConfig, RulerStyle};
pub use events::SelectionChange;
pub use ruler::{Ruler, RulerState};
pub use scroll::GesturePhase;
