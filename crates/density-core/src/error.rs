//! Error types for spatial density estimation
//!
//! Provides a unified error type for all density crates.

use thiserror::Error;

/// Core error type for density estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or degenerate coordinate input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} points, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Unknown option string (method, return geometry, ...)
    #[error("Unsupported {option}: '{value}'")]
    UnsupportedOption { option: &'static str, value: String },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for an axis whose samples are all identical
    pub fn zero_range(axis: char) -> Self {
        Self::InvalidInput(format!(
            "sample range on the {axis} axis is zero; cannot build a density domain"
        ))
    }

    /// Create an error for an unrecognised option value
    pub fn unsupported(option: &'static str, value: impl Into<String>) -> Self {
        Self::UnsupportedOption {
            option,
            value: value.into(),
        }
    }

    /// Whether this error belongs to the malformed/degenerate input class
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InsufficientData { .. })
    }
}
