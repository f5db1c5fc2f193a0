//! OAuth2 error types.

use thiserror::Error;

pub type OAuth2Result<T> = Result<T, OAuth2Error>;

#[derive(Debug, Error)]
pub enum OAuth2Error {
    /// A required request field was missing or empty. Raised before any
    /// network call is made.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The provider's token endpoint answered with a non-success status.
    /// Carries the provider's `error_description` when present, otherwise a
    /// generic fallback.
    #[error("{0}")]
    ProviderRejected(String),

    /// Network-level failure reaching the provider (connect, TLS, timeout).
    /// Kept apart from [`OAuth2Error::ProviderRejected`] so "bad code" and
    /// "provider unreachable" stay distinguishable.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid token response: {0}")]
    InvalidTokenResponse(String),

    #[error("user info request failed: {0}")]
    UserInfoFailed(String),
}
