//! Error types for atmospheric river categorization
//!
//! Provides a unified error type for all arcat crates.

use thiserror::Error;

/// Core error type for categorization operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Intensity data that cannot be categorized
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two sequences or buffers that must agree in length do not
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Configuration (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a negative intensity value
    pub fn negative_intensity(index: usize, value: f64) -> Self {
        Self::InvalidInput(format!(
            "intensity at index {index} is negative ({value})"
        ))
    }

    /// Create an error for a NaN/Inf intensity value
    pub fn non_finite(index: usize) -> Self {
        Self::InvalidInput(format!(
            "intensity at index {index} is NaN or infinite"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }
}
