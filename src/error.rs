//! Error types for navigation data and configuration

use thiserror::Error;

/// Errors raised while loading sidebar data or navigation settings
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Menu node at {path} has no title")]
    MissingTitle { path: String },

    #[error("Invalid navigation config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for navigation loading
pub type NavResult<T> = Result<T, NavError>;
