//! Error types for diagram configuration

use thiserror::Error;

/// Errors that can occur when loading or validating a [`DiagramConfig`](super::DiagramConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has wrongly typed keys
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Radii must satisfy `outer > inner > 0`
    #[error("invalid radii: outer radius {outer} must be greater than inner radius {inner}, which must be positive")]
    InvalidRadii { outer: u32, inner: u32 },

    /// The canvas must be at least as wide as the circle
    #[error("invalid canvas scale {0}: must be at least 2.0")]
    InvalidCanvasScale(f64),

    /// Text needs a visible size
    #[error("invalid font size {0}: must be positive")]
    InvalidFontSize(u32),
}

impl ConfigError {
    /// Create an invalid radii error
    pub fn invalid_radii(outer: u32, inner: u32) -> Self {
        Self::InvalidRadii { outer, inner }
    }
}
