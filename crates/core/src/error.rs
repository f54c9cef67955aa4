//! Error types for the catch simulation system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the catch simulation system.
///
/// The calculation stages never fail; these variants only surface at the
/// boundaries (configuration, ingestion, lever input).
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data error (record rejected at the ingestion boundary).
    #[error("Data error: {0}")]
    Data(String),

    /// Lever percentage outside of its domain.
    #[error("Lever error: {0}")]
    Lever(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    /// Create a lever error.
    pub fn lever(msg: impl Into<String>) -> Self {
        Error::Lever(msg.into())
    }
}
