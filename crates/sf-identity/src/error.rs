//! Identity lookup error types.

use thiserror::Error;

/// Why a single provider attempt failed.
///
/// These never reach the caller of [`crate::IdentityResolver::resolve`];
/// they are logged and the next provider is tried.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status code.
    #[error("provider returned status {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// Response parsed but carried no address.
    #[error("response has no 'ip' field")]
    MissingAddress,

    /// The attempt did not finish within its time budget.
    #[error("attempt timed out after {millis}ms")]
    Timeout { millis: u128 },
}
