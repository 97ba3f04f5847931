//! Client error types.

use thiserror::Error;

/// Errors from the mandatory endpoints (profile, member list) and from
/// building the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credential or base URL problem found while building the client.
    #[error(transparent)]
    Config(#[from] club_config::ConfigError),

    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-200 status.
    #[error("Failed to fetch {path}: HTTP {status}")]
    Status {
        /// Endpoint path relative to the base URL.
        path: String,
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from {path}: {reason}")]
    Parse { path: String, reason: String },
}
