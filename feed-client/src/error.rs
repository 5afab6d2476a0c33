//! Error types for the feed client
//!
//! - `FeedError`: anything that stops a single refresh (transport, HTTP status, body shape)
//! - `ConfigError`: invalid environment configuration at startup

use thiserror::Error;

/// Errors raised while fetching or decoding the package feed.
///
/// These never escape a refresh: the renderer logs them and leaves the
/// container as it was.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected payload: expected an array of records, got {0}")]
    UnexpectedShape(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
