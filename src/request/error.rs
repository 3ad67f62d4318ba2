use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to build request URL from '{0}'")]
    InvalidUrl(String, #[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Open-Meteo rejected the request for {url}: {reason}")]
    Api { url: String, reason: String },

    #[error("Giving up on {url} after {attempts} attempts")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        #[source]
        last_error: Box<RequestError>,
    },

    #[error("Failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read cache file '{0}'")]
    CacheRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write cache file '{0}'")]
    CacheWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode cache data from '{0}'")]
    CacheDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode cache data")]
    CacheEncode(#[source] Box<bincode::error::EncodeError>),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl RequestError {
    /// Whether another attempt might succeed.
    pub(crate) fn is_transient(&self, retry_statuses: &[u16]) -> bool {
        match self {
            RequestError::NetworkRequest(_, e) => e.is_connect() || e.is_timeout() || e.is_request(),
            RequestError::Body(_, e) => e.is_timeout() || e.is_body() || e.is_decode(),
            RequestError::HttpStatus { status, .. } => retry_statuses.contains(&status.as_u16()),
            _ => false,
        }
    }
}
