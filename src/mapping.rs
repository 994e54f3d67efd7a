//! Offset ↔ tick index ↔ value math shared by input handling and painting.
//!
//! The scroll position is a single scalar `offset`, measured in ruler pixels
//! from tick 0: tick `i` sits exactly under the center marker when
//! `offset == i * space`. Both orientations share this domain; the axis only
//! shows up in [`axis_delta`] (mapping pointer motion into offset space) and
//! [`tick_screen_pos`] (projecting a tick around the viewport center).

use eframe::egui::Vec2;

use crate::config::{Orientation, RulerConfig};

/// Smallest legal offset: the first tick aligned with the marker.
pub fn min_offset(cfg: &RulerConfig) -> f32 {
    cfg.start_line as f32 * cfg.space
}

/// Largest legal offset: the last tick aligned with the marker.
pub fn max_offset(cfg: &RulerConfig) -> f32 {
    cfg.lines as f32 * cfg.space
}

/// Clamp an offset into the scrollable range.
///
/// Two-sided and exact: anything past a bound lands on the bound itself, and
/// clamping an already-clamped offset is a no-op.
pub fn clamp_offset(cfg: &RulerConfig, offset: f32) -> f32 {
    offset.clamp(min_offset(cfg), max_offset(cfg))
}

/// The offset that aligns tick `line` with the marker.
pub fn offset_for_line(cfg: &RulerConfig, line: u32) -> f32 {
    line.clamp(cfg.start_line, cfg.lines) as f32 * cfg.space
}

/// Nearest tick index for `offset`, clamped to `[start_line, lines]`.
///
/// An offset exactly halfway between two ticks resolves to the lower index.
pub fn line_for_offset(cfg: &RulerConfig, offset: f32) -> u32 {
    let nearest = (offset / cfg.space - 0.5).ceil() as i64;
    nearest.clamp(cfg.start_line as i64, cfg.lines as i64) as u32
}

/// Human-facing value of tick `line`.
///
/// With `index = line - start_line`, the value is
/// `(start_line + index / step_value) * step_value + index % step_value`
/// (integer division). For `start_line = 0, step_value = 10` this counts
/// 0, 1, …, 9, 10, 11, …; for `start_line = 10` it starts at 100.
pub fn value_for_line(cfg: &RulerConfig, line: u32) -> u32 {
    let index = line.clamp(cfg.start_line, cfg.lines) - cfg.start_line;
    (cfg.start_line + index / cfg.step_value) * cfg.step_value + index % cfg.step_value
}

/// Map a pointer delta (or velocity) into offset space.
///
/// Content follows the finger: on a vertical ruler values grow upward, so
/// dragging down raises the selected value (+dy); on a horizontal ruler
/// values grow rightward, so dragging right lowers it (−dx).
pub fn axis_delta(orientation: Orientation, delta: Vec2) -> f32 {
    match orientation {
        Orientation::Vertical => delta.y,
        Orientation::Horizontal => -delta.x,
    }
}

/// Screen coordinate of tick `line` along the scroll axis.
///
/// `center` is the marker position (the viewport center on that axis). The
/// tick under the marker maps exactly to `center`; on a vertical ruler higher
/// indices project upward (smaller y), on a horizontal ruler rightward.
pub fn tick_screen_pos(cfg: &RulerConfig, center: f32, offset: f32, line: u32) -> f32 {
    let along = line as f32 * cfg.space - offset;
    match cfg.orientation {
        Orientation::Vertical => center - along,
        Orientation::Horizontal => center + along,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RulerConfig {
        RulerConfig::default() // 0..=240, major 10, step 10, space 7
    }

    #[test]
    fn value_mapping_step_pattern() {
        let c = cfg();
        assert_eq!(value_for_line(&c, 0), 0);
        assert_eq!(value_for_line(&c, 9), 9);
        assert_eq!(value_for_line(&c, 10), 10);
        assert_eq!(value_for_line(&c, 23), 23);
    }

    #[test]
    fn value_mapping_with_start_line() {
        // start_line 10 with step 10 counts 100, 101, …, 110, …
        let c = RulerConfig::default().with_range(10, 240);
        assert_eq!(value_for_line(&c, 10), 100);
        assert_eq!(value_for_line(&c, 11), 101);
        assert_eq!(value_for_line(&c, 20), 110);
    }

    #[test]
    fn value_mapping_is_monotone_and_unique() {
        let c = RulerConfig::default().with_range(5, 120).with_step_value(5);
        let mut prev = None;
        for line in c.start_line..=c.lines {
            let v = value_for_line(&c, line);
            if let Some(p) = prev {
                assert!(v > p, "value must strictly increase per tick ({p} -> {v})");
            }
            prev = Some(v);
        }
    }

    #[test]
    fn line_for_offset_rounds_to_nearest() {
        let c = cfg();
        assert_eq!(line_for_offset(&c, 0.0), 0);
        assert_eq!(line_for_offset(&c, 7.0), 1);
        assert_eq!(line_for_offset(&c, 7.0 * 3.0 + 3.0), 3);
        assert_eq!(line_for_offset(&c, 7.0 * 3.0 + 4.0), 4);
    }

    #[test]
    fn line_for_offset_ties_resolve_to_lower_index() {
        // space 8 keeps the midpoint exactly representable
        let c = RulerConfig::default().with_space(8.0);
        assert_eq!(line_for_offset(&c, 12.0), 1, "midpoint 12 between ticks 1 and 2");
        assert_eq!(line_for_offset(&c, 20.0), 2, "midpoint 20 between ticks 2 and 3");
    }

    #[test]
    fn line_for_offset_clamps_out_of_range() {
        let c = RulerConfig::default().with_range(10, 20);
        assert_eq!(line_for_offset(&c, -500.0), 10);
        assert_eq!(line_for_offset(&c, 0.0), 10);
        assert_eq!(line_for_offset(&c, 1e6), 20);
    }

    #[test]
    fn clamp_is_exact_and_idempotent() {
        let c = RulerConfig::default().with_range(10, 20);
        let lo = min_offset(&c);
        let hi = max_offset(&c);
        assert_eq!(clamp_offset(&c, lo - 100.0), lo);
        assert_eq!(clamp_offset(&c, clamp_offset(&c, lo - 100.0)), lo);
        assert_eq!(clamp_offset(&c, hi + 100.0), hi);
        assert_eq!(clamp_offset(&c, clamp_offset(&c, hi + 100.0)), hi);
    }

    #[test]
    fn axis_delta_signs() {
        let down_right = Vec2::new(3.0, 5.0);
        assert_eq!(axis_delta(Orientation::Vertical, down_right), 5.0);
        assert_eq!(axis_delta(Orientation::Horizontal, down_right), -3.0);
    }

    #[test]
    fn tick_projection_centers_the_aligned_tick() {
        let mut c = cfg();
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            c.orientation = orientation;
            let offset = offset_for_line(&c, 12);
            assert_eq!(tick_screen_pos(&c, 300.0, offset, 12), 300.0);
        }
        // Vertical: higher indices above the marker (smaller y)
        c.orientation = Orientation::Vertical;
        assert!(tick_screen_pos(&c, 300.0, 0.0, 5) < 300.0);
        // Horizontal: higher indices right of the marker
        c.orientation = Orientation::Horizontal;
        assert!(tick_screen_pos(&c, 300.0, 0.0, 5) > 300.0);
    }
}
