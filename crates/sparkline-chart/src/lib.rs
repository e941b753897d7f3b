#![forbid(unsafe_code)]

//! Sparkline rendering: bounded sample history, axis autoranging, and
//! clipped polyline redraw against an abstract canvas.
//!
//! The host graphics stack owns the display; this crate only turns the
//! current sample window into an ordered batch of [`Segment`] line
//! primitives. Each [`Sparkline::redraw`] discards the previous batch and
//! emits a fresh one, so the collaborator can swap atomically.
//!
//! # Example
//!
//! ```
//! use sparkline_chart::{MemoryCanvas, Sparkline};
//!
//! let mut spark = Sparkline::builder(64, 16, 32)
//!     .lower_bound(0.0)
//!     .upper_bound(100.0)
//!     .build()
//!     .unwrap();
//!
//! for v in [12.0, 48.0, 95.0, 30.0] {
//!     spark.push(v);
//! }
//!
//! let mut canvas = MemoryCanvas::new();
//! spark.redraw(&mut canvas);
//! assert_eq!(canvas.segments().len(), 3);
//! ```

pub mod axis;
pub mod buffer;
pub mod canvas;
pub mod error;
pub mod segment;
pub mod sparkline;

pub use axis::AxisRange;
pub use buffer::SampleBuffer;
pub use canvas::{Canvas, MemoryCanvas};
pub use error::ConfigError;
pub use segment::Segment;
pub use sparkline::{Sparkline, SparklineBuilder};
