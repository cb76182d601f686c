//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid keyword pattern: {0}")]
    Keyword(#[from] regex::Error),

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    #[error("backend channel closed")]
    BackendClosed,
}
