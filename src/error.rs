//! Error types for session construction

use thiserror::Error;

/// Rejected configuration. Raised while building platforms or sessions,
/// never from inside a running tick.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Platform velocity must be finite, got {0}")]
    InvalidVelocity(f32),

    #[error("Platform width must be a finite non-negative number, got {0}")]
    InvalidWidth(f32),

    #[error("Unknown quirk: {0}")]
    UnknownQuirk(String),

    #[error("Invalid quirk weights: {0}")]
    InvalidWeights(String),

    #[error("Viewport must be at least {min}x{min_height}, got {width}x{height}")]
    InvalidViewport {
        width: u32,
        height: u32,
        min: u32,
        min_height: u32,
    },

    #[error("Frame rate must be positive")]
    InvalidFrameRate,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
