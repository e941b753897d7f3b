#![forbid(unsafe_code)]

//! The boundary to the host graphics stack.
//!
//! The renderer never touches a display. It talks to a [`Canvas`], which
//! the host implements over whatever it draws with (a framebuffer, a
//! display-list group, a GPU batch). A redraw is always a full batch:
//! `clear_segments` first, then the fresh ordered set, oldest pair first,
//! so the host can swap its primitive list atomically.

use crate::segment::Segment;

/// A sink for drawable line primitives.
pub trait Canvas {
    /// Remove every primitive previously appended by this chart.
    fn clear_segments(&mut self);

    /// Append one line primitive to the current batch.
    fn append_segment(&mut self, segment: Segment);
}

/// An in-memory [`Canvas`] that records the current batch.
///
/// The headless backend: tests and benchmarks inspect the recorded batch,
/// and hosts without retained display lists can replay it each frame.
#[derive(Debug, Clone, Default)]
pub struct MemoryCanvas {
    segments: Vec<Segment>,
}

impl MemoryCanvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current batch, oldest segment first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Canvas for MemoryCanvas {
    fn clear_segments(&mut self) {
        self.segments.clear();
    }

    fn append_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, MemoryCanvas};
    use crate::segment::Segment;
    use sparkline_core::color::PackedRgb;
    use sparkline_core::geometry::Point;

    fn seg(x: i32) -> Segment {
        Segment::new(Point::new(x, 0), Point::new(x + 1, 1), PackedRgb::WHITE)
    }

    #[test]
    fn append_preserves_order() {
        let mut canvas = MemoryCanvas::new();
        canvas.append_segment(seg(0));
        canvas.append_segment(seg(5));
        assert_eq!(canvas.segments().len(), 2);
        assert_eq!(canvas.segments()[0].start.x, 0);
        assert_eq!(canvas.segments()[1].start.x, 5);
    }

    #[test]
    fn clear_discards_batch() {
        let mut canvas = MemoryCanvas::new();
        canvas.append_segment(seg(0));
        canvas.clear_segments();
        assert!(canvas.segments().is_empty());
    }
}
