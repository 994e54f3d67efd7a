//! Reusable flat buffer of line-segment endpoints for the batched tick draw.

use eframe::egui::Pos2;

/// Grow-only storage of `[ax, ay, bx, by]` quadruples, one per tick segment.
///
/// The backing vector is sized to the full tick range once and reused across
/// redraws: [`reset`](Self::reset) grows it when the tick count grows, never
/// shrinks it, and zeroes the active region so a pass can never paint stale
/// endpoints from a previous (larger) range.
#[derive(Debug, Default)]
pub struct LineBuffer {
    coords: Vec<f32>,
    prepared: usize,
    len: usize,
}

impl LineBuffer {
    /// Prepare the buffer for a pass of at most `segments` segments.
    pub fn reset(&mut self, segments: usize) {
        let needed = segments * 4;
        if self.coords.len() < needed {
            self.coords = vec![0.0; needed];
        } else {
            self.coords.fill(0.0);
        }
        self.prepared = segments;
        self.len = 0;
    }

    /// Append one segment. Quietly ignored once the prepared capacity is
    /// full; the caller sizes the pass via [`reset`](Self::reset).
    pub fn push(&mut self, a: Pos2, b: Pos2) {
        if self.len >= self.prepared {
            return;
        }
        let at = self.len * 4;
        self.coords[at] = a.x;
        self.coords[at + 1] = a.y;
        self.coords[at + 2] = b.x;
        self.coords[at + 3] = b.y;
        self.len += 1;
    }

    /// Segments pushed since the last reset.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity in segments (backing storage, not the current pass).
    pub fn capacity(&self) -> usize {
        self.coords.len() / 4
    }

    /// Iterate the segments of the current pass.
    pub fn segments(&self) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
        self.coords[..self.len * 4].chunks_exact(4).map(|c| {
            (Pos2::new(c[0], c[1]), Pos2::new(c[2], c[3]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_but_never_shrinks() {
        let mut buf = LineBuffer::default();
        buf.reset(100);
        assert_eq!(buf.capacity(), 100);
        buf.reset(10);
        assert_eq!(buf.capacity(), 100, "capacity must survive a smaller pass");
        buf.reset(200);
        assert_eq!(buf.capacity(), 200);
    }

    #[test]
    fn no_stale_segments_after_resize_cycle() {
        let mut buf = LineBuffer::default();
        buf.reset(4);
        for i in 0..4 {
            let x = i as f32;
            buf.push(Pos2::new(x, 0.0), Pos2::new(x, 1.0));
        }
        assert_eq!(buf.len(), 4);

        // Shrink the pass: only what was pushed this pass is visible.
        buf.reset(2);
        buf.push(Pos2::new(9.0, 9.0), Pos2::new(9.0, 10.0));
        let segs: Vec<_> = buf.segments().collect();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].0, Pos2::new(9.0, 9.0));

        // Grow again: the region beyond the previous pass is zeroed, and
        // iteration still covers exactly what was pushed.
        buf.reset(6);
        assert_eq!(buf.segments().count(), 0);
    }

    #[test]
    fn push_beyond_prepared_capacity_is_ignored() {
        let mut buf = LineBuffer::default();
        buf.reset(1);
        buf.push(Pos2::new(0.0, 0.0), Pos2::new(1.0, 0.0));
        buf.push(Pos2::new(2.0, 0.0), Pos2::new(3.0, 0.0));
        assert_eq!(buf.len(), 1);
    }
}
