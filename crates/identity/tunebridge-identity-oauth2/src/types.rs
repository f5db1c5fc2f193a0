//! OAuth2 protocol types.

use serde::{Deserialize, Serialize};

/// Successful token payload from the provider's token endpoint.
///
/// `access_token` and `expires_in` are required; a payload missing either
/// fails at deserialization rather than at field access. `refresh_token` is
/// only present when the provider's consent history allows it (Google omits
/// it on repeat consent unless re-consent is forced).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
}

/// Structured error payload from the provider's token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenErrorBody {
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Provider-defined profile mapping.
///
/// Best-effort: the empty mapping when the userinfo lookup fails.
pub type ProfileInfo = serde_json::Map<String, serde_json::Value>;

/// The bundle returned to the caller after a successful exchange.
///
/// An absent refresh token serializes as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub user: ProfileInfo,
}
