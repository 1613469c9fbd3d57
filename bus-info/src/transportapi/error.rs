//! TransportAPI client error types.

use crate::domain::{InvalidAtco, ParseError};

/// Errors from querying TransportAPI.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// App id or app key is empty or absent
    #[error("missing app credentials")]
    MissingCredentials,

    /// Stop code failed local validation
    #[error(transparent)]
    InvalidStop(#[from] InvalidAtco),

    /// TransportAPI does not know this stop (HTTP 404 on a stop lookup)
    #[error("unknown ATCO code: {atco}")]
    UnknownStop { atco: String },

    /// API returned a non-success status code
    #[error("API error {status}: {body}")]
    Transport { status: u16, body: String },

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("invalid JSON: {message} (body: {body})")]
    MalformedResponse { message: String, body: String },

    /// Base URL and path do not form a valid URL
    #[error("invalid request URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// A departure's date or time could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}
