//! Error types for ags-core

use thiserror::Error;

/// Main error type for ags-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Agent backend error: {0}")]
    Backend(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for ags-core
pub type Result<T> = std::result::Result<T, Error>;
