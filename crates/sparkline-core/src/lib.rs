#![forbid(unsafe_code)]

//! Core primitives: pixel geometry, packed colors, and logging shims.

pub mod color;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn, warn_span};
