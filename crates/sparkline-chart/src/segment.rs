#![forbid(unsafe_code)]

//! The drawable line primitive handed to the canvas.

use sparkline_core::color::PackedRgb;
use sparkline_core::geometry::Point;

/// One straight line in screen space, ready to draw.
///
/// Endpoints already include the chart's viewport offset. Segments are
/// transient: every redraw regenerates the full batch and the previous one
/// is discarded, so nothing here is meant to be mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: PackedRgb,
}

impl Segment {
    /// Create a new segment.
    #[inline]
    pub const fn new(start: Point, end: Point, color: PackedRgb) -> Self {
        Self { start, end, color }
    }

    /// Return this segment shifted by the given offsets.
    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            start: self.start.translated(dx, dy),
            end: self.end.translated(dx, dy),
            color: self.color,
        }
    }

    /// Check if both endpoints coincide.
    #[inline]
    pub const fn is_point(&self) -> bool {
        self.start.x == self.end.x && self.start.y == self.end.y
    }
}

#[cfg(test)]
mod tests {
    use super::Segment;
    use sparkline_core::color::PackedRgb;
    use sparkline_core::geometry::Point;

    #[test]
    fn translated_moves_both_endpoints() {
        let seg = Segment::new(Point::new(0, 1), Point::new(4, 3), PackedRgb::WHITE);
        let moved = seg.translated(10, -1);
        assert_eq!(moved.start, Point::new(10, 0));
        assert_eq!(moved.end, Point::new(14, 2));
        assert_eq!(moved.color, PackedRgb::WHITE);
    }

    #[test]
    fn is_point_detects_degenerate_segments() {
        let p = Point::new(2, 2);
        assert!(Segment::new(p, p, PackedRgb::RED).is_point());
        assert!(!Segment::new(p, Point::new(2, 3), PackedRgb::RED).is_point());
    }
}
