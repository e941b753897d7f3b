#![forbid(unsafe_code)]

//! Fixed-capacity sample history.

use std::collections::VecDeque;

use crate::error::ConfigError;

/// A bounded FIFO of samples.
///
/// Holds at most `capacity` values; pushing into a full buffer evicts the
/// oldest sample first. Iteration order is insertion order, oldest first,
/// which is also the left-to-right order the renderer plots in.
///
/// Samples are stored as-is: NaN and infinite values are accepted (axis
/// resolution guards against non-finite fold results, and anything out of
/// the configured range is clipped at redraw, not rejected here).
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create an empty buffer.
    ///
    /// Fails with [`ConfigError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Remove all samples. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recently pushed sample, if any.
    #[inline]
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Iterate over the samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.samples.iter().copied()
    }

    /// Defensive copy of the samples, oldest first.
    pub fn to_vec(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }
}
