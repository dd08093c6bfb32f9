//! Error types for the Soon screen configuration

use thiserror::Error;

/// Main error type for configuring the Soon screen
#[derive(Error, Debug)]
pub enum SoonError {
    /// Color string is not `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Numeric bounds are inverted, NaN, or outside their limits
    #[error("Invalid bounds for {field}: min {min}, max {max}")]
    InvalidBounds {
        field: &'static str,
        min: f32,
        max: f32,
    },

    /// More flakes requested than one overlay may hold
    #[error("Too many snowflakes: {count} (max {max})")]
    TooManySnowflakes { count: u32, max: u32 },

    /// Headline is empty or whitespace only
    #[error("Headline must not be empty")]
    EmptyHeadline,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for Soon operations
pub type Result<T> = std::result::Result<T, SoonError>;
