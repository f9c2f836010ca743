//! Common error types for tierplan

use thiserror::Error;

/// Common result type for tierplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the tierplan tools
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Solved-model dump could not be parsed (wraps serde_json::Error)
    #[error("Model parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed (wraps toml::de::Error)
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Solved model contains data the report cannot render
    #[error("Invalid model data: {0}")]
    Model(String),
}
