// file: src/error.rs
// version: 1.0.0
// guid: 7c2e4b91-0d5a-4e38-b6f1-92a83c7d5e10

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ConfigToolError>;

/// Error types for the provider config tool
#[derive(Error, Debug)]
pub enum ConfigToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Command execution error: {0}")]
    Execution(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigToolError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }
}
