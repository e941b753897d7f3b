#![forbid(unsafe_code)]

//! Construction-time errors.
//!
//! Nothing here is raised during a redraw: out-of-range samples are normal
//! input handled by clipping, and a collapsed value range is recovered
//! locally by symmetric widening. Only invalid configuration is reported.

/// Errors raised when building a renderer or sample buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The sample capacity was zero; the history needs room for at least
    /// one sample.
    ZeroCapacity,
    /// The viewport width or height was zero.
    EmptyViewport { width: u16, height: u16 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "sample capacity must be at least 1"),
            Self::EmptyViewport { width, height } => {
                write!(f, "viewport must have positive dimensions, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn display_messages() {
        assert_eq!(
            ConfigError::ZeroCapacity.to_string(),
            "sample capacity must be at least 1"
        );
        assert_eq!(
            ConfigError::EmptyViewport {
                width: 0,
                height: 16
            }
            .to_string(),
            "viewport must have positive dimensions, got 0x16"
        );
    }
}
