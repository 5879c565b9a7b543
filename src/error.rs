// src/error.rs
use thiserror::Error;

/// Why a single API call produced no value.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Host unreachable, TLS failure, connection reset, ...
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered but had nothing for this request.
    #[error("no data")]
    NotFound,
}

impl FetchError {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => FetchError::NotFound,
            s => FetchError::Status { status: s },
        }
    }
}

pub type Fetch = std::result::Result<serde_json::Value, FetchError>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
