//! Configuration error types.

/// Errors raised when a generation or explorer configuration is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A range whose minimum exceeds its maximum.
    #[error("{field}: minimum {min} is greater than maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// A range that holds no integer once its bounds are normalized (ceil(min) > floor(max)).
    #[error("{field}: range [{min}, {max}] contains no integer")]
    EmptyRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// A count or span that dropped below zero.
    #[error("{field}: {value} must not be negative")]
    Negative { field: &'static str, value: f64 },

    /// A radius or orbit increment that could draw zero or less.
    #[error("{field}: minimum {value} must be at least 1")]
    NonPositive { field: &'static str, value: f64 },

    /// NaN or infinite bound.
    #[error("{field}: bound {value} is not finite")]
    NonFinite { field: &'static str, value: f64 },

    /// A non-positive duration, field of view or clip plane.
    #[error("{field}: {value} must be positive")]
    InvalidSetting { field: &'static str, value: f64 },

    /// Failed to parse JSON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}
