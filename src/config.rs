//! Configuration types for the ruler widget.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Orientation
// ─────────────────────────────────────────────────────────────────────────────

/// Scroll axis of the ruler.
///
/// Vertical rulers grow upward (larger values above the marker), horizontal
/// rulers grow rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Vertical
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ConfigError
// ─────────────────────────────────────────────────────────────────────────────

/// Rejected ruler configuration.
///
/// All geometry math clamps to `[start_line, lines]` at runtime, so a config
/// where that range is empty (or a divisor is zero) can only produce corrupt
/// visuals. Such configs are refused up front instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `lines` is smaller than `start_line`, leaving no ticks to draw.
    EmptyRange { start_line: u32, lines: u32 },
    /// `major_every` is zero; the major-tick test divides by it.
    ZeroMajorInterval,
    /// `step_value` is zero; the value mapping divides by it.
    ZeroStepValue,
    /// `space` is zero or negative; every offset would map to tick 0.
    NonPositiveSpace(f32),
    /// `ratio` is zero or negative; fling velocity would be unbounded.
    NonPositiveRatio(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyRange { start_line, lines } => {
                write!(f, "lines ({lines}) must not be smaller than start_line ({start_line})")
            }
            ConfigError::ZeroMajorInterval => write!(f, "major_every must be at least 1"),
            ConfigError::ZeroStepValue => write!(f, "step_value must be at least 1"),
            ConfigError::NonPositiveSpace(v) => write!(f, "space must be positive (got {v})"),
            ConfigError::NonPositiveRatio(v) => write!(f, "ratio must be positive (got {v})"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ─────────────────────────────────────────────────────────────────────────────
// RulerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Tick geometry and scroll physics of a ruler.
///
/// Immutable while the widget is shown: the widget borrows the config each
/// frame, so swapping in a different value takes effect on the next frame.
///
/// | Field        | Meaning                                | Default |
/// |--------------|----------------------------------------|---------|
/// | `orientation`| Scroll axis                            | Vertical |
/// | `lines`      | Index of the last tick                 | 240     |
/// | `start_line` | Index of the first tick                | 0       |
/// | `major_every`| Every Nth tick is a long, labeled one  | 10      |
/// | `step_value` | Value step between major ticks         | 10      |
/// | `space`      | Distance between adjacent ticks (px)   | 7.0     |
/// | `ratio`      | Fling damping (gesture velocity ÷ ratio)| 2.0    |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig {
    pub orientation: Orientation,
    pub lines: u32,
    pub start_line: u32,
    pub major_every: u32,
    pub step_value: u32,
    pub space: f32,
    pub ratio: f32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            lines: 240,
            start_line: 0,
            major_every: 10,
            step_value: 10,
            space: 7.0,
            ratio: 2.0,
        }
    }
}

impl RulerConfig {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the tick index range `[start_line, lines]`.
    pub fn with_range(mut self, start_line: u32, lines: u32) -> Self {
        self.start_line = start_line;
        self.lines = lines;
        self
    }

    pub fn with_major_every(mut self, major_every: u32) -> Self {
        self.major_every = major_every;
        self
    }

    pub fn with_step_value(mut self, step_value: u32) -> Self {
        self.step_value = step_value;
        self
    }

    pub fn with_space(mut self, space: f32) -> Self {
        self.space = space;
        self
    }

    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio;
        self
    }

    /// Check the config for contract violations.
    ///
    /// Called by [`RulerState::new`](crate::RulerState::new); hosts building
    /// configs from untrusted input can call it directly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lines < self.start_line {
            return Err(ConfigError::EmptyRange {
                start_line: self.start_line,
                lines: self.lines,
            });
        }
        if self.major_every == 0 {
            return Err(ConfigError::ZeroMajorInterval);
        }
        if self.step_value == 0 {
            return Err(ConfigError::ZeroStepValue);
        }
        if !(self.space > 0.0) {
            return Err(ConfigError::NonPositiveSpace(self.space));
        }
        if !(self.ratio > 0.0) {
            return Err(ConfigError::NonPositiveRatio(self.ratio));
        }
        Ok(())
    }

    /// Number of ticks drawn, first and last inclusive.
    pub fn tick_count(&self) -> usize {
        (self.lines - self.start_line) as usize + 1
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RulerStyle
// ─────────────────────────────────────────────────────────────────────────────

/// Colors and sizes of the drawn ruler.
///
/// Defaults reproduce the classic look: a cyan-blue body with white
/// graduations and a darker teal highlight on the selected tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerStyle {
    pub background: Color32,
    pub line_color: Color32,
    pub highlight_color: Color32,
    pub text_color: Color32,
    pub marker_color: Color32,

    /// Label font size in points.
    pub text_size: f32,
    /// Length of a minor tick mark (px).
    pub short_line: f32,
    /// Length of a major tick mark (px).
    pub long_line: f32,
    /// Stroke width of ordinary ticks (px).
    pub line_width: f32,
    /// Stroke width of the selected tick (px).
    pub highlight_width: f32,
    /// Half-height of the marker triangle; also its depth (px).
    pub marker_size: f32,
    /// Gap between the long ticks and the marker triangle (px).
    pub marker_space: f32,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0x03, 0xb7, 0xee),
            line_color: Color32::WHITE,
            highlight_color: Color32::from_rgb(0x1e, 0x7d, 0x9e),
            text_color: Color32::WHITE,
            marker_color: Color32::WHITE,
            text_size: 12.0,
            short_line: 12.0,
            long_line: 20.0,
            line_width: 1.0,
            highlight_width: 1.5,
            marker_size: 10.0,
            marker_space: 8.0,
        }
    }
}

impl RulerStyle {
    pub fn with_background(mut self, color: Color32) -> Self {
        self.background = color;
        self
    }

    pub fn with_line_color(mut self, color: Color32) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_highlight_color(mut self, color: Color32) -> Self {
        self.highlight_color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color32) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_marker_color(mut self, color: Color32) -> Self {
        self.marker_color = color;
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }
}
