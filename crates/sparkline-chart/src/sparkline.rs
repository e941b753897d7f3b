#![forbid(unsafe_code)]

//! The sparkline renderer: pitch, mapping, and boundary clipping.
//!
//! A [`Sparkline`] owns one [`SampleBuffer`] plus an immutable axis,
//! viewport, and color configuration. Each [`Sparkline::redraw`] resolves
//! the vertical range, walks consecutive sample pairs left to right, maps
//! them to pixel coordinates, clips against the resolved bounds, and emits
//! the resulting [`Segment`] batch to the canvas.
//!
//! All pixel coordinates truncate toward zero. The reference hardware
//! implementation truncates, and intercept-based clipping is sensitive to
//! the rounding direction at the pixel boundary, so the same rule is
//! applied everywhere here.

use sparkline_core::color::PackedRgb;
use sparkline_core::geometry::{Point, Viewport};

use crate::axis::AxisRange;
use crate::buffer::SampleBuffer;
use crate::canvas::Canvas;
use crate::error::ConfigError;
use crate::segment::Segment;

/// Minimum samples before any line is drawn.
const MIN_PLOT_SAMPLES: usize = 3;

/// A continuously-updating line chart over a bounded sample window.
///
/// # Example
///
/// ```
/// use sparkline_chart::{MemoryCanvas, Sparkline};
///
/// let mut spark = Sparkline::builder(10, 10, 3)
///     .lower_bound(0.0)
///     .upper_bound(10.0)
///     .build()
///     .unwrap();
/// for v in [1.0, 2.0, 3.0, 4.0] {
///     spark.push(v);
/// }
/// assert_eq!(spark.values(), vec![2.0, 3.0, 4.0]);
///
/// let mut canvas = MemoryCanvas::new();
/// spark.redraw(&mut canvas);
/// assert_eq!(canvas.segments().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Sparkline {
    buffer: SampleBuffer,
    range: AxisRange,
    viewport: Viewport,
    color: PackedRgb,
}

/// Builder for [`Sparkline`]. Configuration is immutable once built.
#[derive(Debug, Clone)]
pub struct SparklineBuilder {
    width: u16,
    height: u16,
    max_items: usize,
    range: AxisRange,
    x: i32,
    y: i32,
    color: PackedRgb,
}

impl SparklineBuilder {
    /// Fix the lower axis bound (otherwise autoscaled from the samples).
    pub fn lower_bound(mut self, lower: f64) -> Self {
        self.range.lower = Some(lower);
        self
    }

    /// Fix the upper axis bound (otherwise autoscaled from the samples).
    pub fn upper_bound(mut self, upper: f64) -> Self {
        self.range.upper = Some(upper);
        self
    }

    /// Place the chart's top-left corner on the screen. Defaults to (0, 0).
    pub fn origin(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the line color. Defaults to [`PackedRgb::WHITE`].
    pub fn color(mut self, color: PackedRgb) -> Self {
        self.color = color;
        self
    }

    /// Validate the configuration and build the renderer.
    pub fn build(self) -> Result<Sparkline, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(Sparkline {
            buffer: SampleBuffer::new(self.max_items)?,
            range: self.range,
            viewport: Viewport::new(self.x, self.y, self.width, self.height),
            color: self.color,
        })
    }
}

impl Sparkline {
    /// Start building a sparkline over a `width` x `height` pixel viewport
    /// holding at most `max_items` samples.
    pub fn builder(width: u16, height: u16, max_items: usize) -> SparklineBuilder {
        SparklineBuilder {
            width,
            height,
            max_items,
            range: AxisRange::auto(),
            x: 0,
            y: 0,
            color: PackedRgb::WHITE,
        }
    }

    /// Record a sample, evicting the oldest when the window is full.
    ///
    /// `None` is a deliberate, silent no-op so hosts can forward readings
    /// from sensors that occasionally fail to produce one. Pushing never
    /// draws; call [`Sparkline::redraw`] when the display should update.
    pub fn push(&mut self, value: impl Into<Option<f64>>) {
        if let Some(v) = value.into() {
            self.buffer.push(v);
        }
    }

    /// Drop all recorded samples.
    ///
    /// Capacity and axis configuration are unchanged. The canvas keeps its
    /// last batch until the next redraw, which will emit an empty one.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Defensive copy of the current samples, oldest first.
    pub fn values(&self) -> Vec<f64> {
        self.buffer.to_vec()
    }

    /// Number of samples currently recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no samples are recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Sample capacity, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The pixel region this chart draws into.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The configured axis range.
    #[inline]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    /// The configured line color.
    #[inline]
    pub fn color(&self) -> PackedRgb {
        self.color
    }

    /// Replace the canvas's batch with segments for the current samples.
    ///
    /// The previous batch is always discarded, even when nothing new is
    /// emitted. Fewer than three samples leave the chart blank: a single
    /// point or one pair has no trend worth a polyline on displays this
    /// small. Pairs fully outside the resolved range are culled; pairs
    /// straddling a bound are clipped so every emitted endpoint maps a
    /// value inside the range.
    pub fn redraw(&self, canvas: &mut impl Canvas) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "sparkline_redraw",
            samples = self.buffer.len(),
            w = self.viewport.width,
            h = self.viewport.height,
        )
        .entered();

        canvas.clear_segments();

        let n = self.buffer.len();
        if n < MIN_PLOT_SAMPLES {
            return;
        }

        let (lower, upper) = self.range.resolve(self.buffer.iter());

        // Fractional pixel spacing between consecutive samples; truncated
        // to an integer only when an endpoint is emitted, so rounding error
        // does not accumulate across the window.
        let xpitch = f64::from(self.viewport.width - 1) / (n - 1) as f64;

        let mut samples = self.buffer.iter();
        let Some(mut prev) = samples.next() else {
            return;
        };
        for (i, value) in samples.enumerate() {
            // `value` sits at index i + 1 in the window, `prev` at i.
            let x1 = (xpitch * i as f64) as i32;
            let x2 = (xpitch * (i + 1) as f64) as i32;

            let prev_in = prev >= lower && prev <= upper;
            let value_in = value >= lower && value <= upper;

            if prev_in && value_in {
                // Whole pair visible
                self.emit(canvas, x1, prev, x2, value, lower, upper);
            } else if (prev > upper && value > upper) || (prev < lower && value < lower) {
                // Whole pair on the same out-of-range side: invisible
            } else if let (Some(xint_bottom), Some(xint_top)) = (
                x_intercept(x1, prev, x2, value, lower),
                x_intercept(x1, prev, x2, value, upper),
            ) {
                let mut cx1 = x1;
                let mut cv1 = prev;
                let mut cx2 = x2;
                let mut cv2 = value;

                if value > prev {
                    // Rising pair: enters from below, exits above
                    if xint_bottom >= x1 {
                        cx1 = xint_bottom;
                        cv1 = lower;
                    }
                    if xint_top <= x2 {
                        cx2 = xint_top;
                        cv2 = upper;
                    }
                } else {
                    // Falling pair: enters from above, exits below
                    if xint_top >= x1 {
                        cx1 = xint_top;
                        cv1 = upper;
                    }
                    if xint_bottom <= x2 {
                        cx2 = xint_bottom;
                        cv2 = lower;
                    }
                }

                self.emit(canvas, cx1, cv1, cx2, cv2, lower, upper);
            }
            // A required intercept was undefined: skip the pair entirely
            // rather than guessing a clip.

            prev = value;
        }
    }

    /// Map a pair of values to screen space and append the segment.
    fn emit(
        &self,
        canvas: &mut impl Canvas,
        x1: i32,
        v1: f64,
        x2: i32,
        v2: f64,
        lower: f64,
        upper: f64,
    ) {
        let y1 = self.map_y(v1, lower, upper);
        let y2 = self.map_y(v2, lower, upper);
        canvas.append_segment(Segment::new(
            Point::new(x1, y1).translated(self.viewport.x, self.viewport.y),
            Point::new(x2, y2).translated(self.viewport.x, self.viewport.y),
            self.color,
        ));
    }

    /// Linear inversion: `upper` maps to pixel row 0 (top), `lower` to row
    /// `height` (bottom). Range resolution guarantees `upper != lower`.
    fn map_y(&self, value: f64, lower: f64, upper: f64) -> i32 {
        (f64::from(self.viewport.height) * (upper - value) / (upper - lower)) as i32
    }
}

/// X coordinate where the pixel-space line through `(x1, v1)-(x2, v2)`
/// crosses the horizontal at `boundary`, truncated toward zero.
///
/// Returns `None` when no crossing exists: a horizontal pair away from the
/// boundary, or degenerate arithmetic (a horizontal pair exactly on the
/// boundary, or a zero-width pixel step) that leaves the result non-finite.
fn x_intercept(x1: i32, v1: f64, x2: i32, v2: f64, boundary: f64) -> Option<i32> {
    let slope = (v2 - v1) / f64::from(x2 - x1);
    let b = v1 - slope * f64::from(x1);

    if slope == 0.0 && v1 != boundary {
        return None;
    }
    let xint = (boundary - b) / slope;
    if xint.is_finite() { Some(xint as i32) } else { None }
}
