#![forbid(unsafe_code)]

//! Vertical axis configuration and per-redraw range resolution.

/// Padding applied to each side of a collapsed range.
///
/// When the resolved lower and upper bounds coincide the mapping would
/// divide by zero; both bounds are pushed apart by this amount instead.
pub const FLAT_RANGE_PAD: f64 = 10.0;

/// The vertical range of a chart.
///
/// Each edge is either fixed or autoscaled (`None`) from the live samples;
/// the two edges are configured independently. Resolution happens on every
/// redraw so autoscaled edges track the current sample window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRange {
    /// Fixed lower bound, or `None` to autoscale from the sample minimum.
    pub lower: Option<f64>,
    /// Fixed upper bound, or `None` to autoscale from the sample maximum.
    pub upper: Option<f64>,
}

impl AxisRange {
    /// Autoscale both edges.
    #[inline]
    pub const fn auto() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Fix both edges.
    #[inline]
    pub const fn fixed(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Check if either edge is autoscaled.
    #[inline]
    pub const fn is_autoscaled(&self) -> bool {
        self.lower.is_none() || self.upper.is_none()
    }

    /// Resolve the effective `(lower, upper)` bounds for one redraw.
    ///
    /// Autoscaled edges take the min/max of `samples`; a non-finite fold
    /// result (no samples, or an infinite sample) falls back to 0.0. If the
    /// two resolved bounds coincide, both are widened by
    /// [`FLAT_RANGE_PAD`], so the result always has `upper > lower` when
    /// the configured fixed bounds are not inverted.
    pub fn resolve(&self, samples: impl IntoIterator<Item = f64>) -> (f64, f64) {
        let mut data_min = f64::INFINITY;
        let mut data_max = f64::NEG_INFINITY;
        if self.is_autoscaled() {
            for v in samples {
                data_min = data_min.min(v);
                data_max = data_max.max(v);
            }
        }

        let mut lower = self
            .lower
            .unwrap_or(if data_min.is_finite() { data_min } else { 0.0 });
        let mut upper = self
            .upper
            .unwrap_or(if data_max.is_finite() { data_max } else { 0.0 });

        if lower == upper {
            lower -= FLAT_RANGE_PAD;
            upper += FLAT_RANGE_PAD;
        }

        (lower, upper)
    }
}
