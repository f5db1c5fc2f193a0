//! OAuth2 token-exchange client.

use crate::config::OAuth2Config;
use crate::error::{OAuth2Error, OAuth2Result};
use crate::types::{ExchangeResponse, ProfileInfo, TokenErrorBody, TokenResponse};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Fallback message when the provider's error body carries no description.
const TOKEN_EXCHANGE_FAILED: &str = "Token exchange failed";

/// Client for the authorization-code + PKCE token exchange.
///
/// Holds a pooled HTTP client and the immutable provider configuration;
/// cloning is cheap and every clone shares the connection pool.
#[derive(Clone)]
pub struct OAuth2Client {
    http_client: Client,
    config: OAuth2Config,
}

impl OAuth2Client {
    pub fn new(config: OAuth2Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            config,
        }
    }

    /// Exchange an authorization code and PKCE verifier for tokens.
    ///
    /// The token request is the only place the client secret and the
    /// verifier are used. On a confirmed-successful token response the
    /// provider's userinfo endpoint is queried exactly once with the fresh
    /// access token; any failure there degrades to an empty profile mapping
    /// without failing the exchange. Each endpoint is contacted at most once
    /// per call, with no retries.
    pub async fn exchange_code(
        &self,
        code: &str,
        code_verifier: &str,
    ) -> OAuth2Result<ExchangeResponse> {
        if code.is_empty() {
            return Err(OAuth2Error::MissingField("code"));
        }
        if code_verifier.is_empty() {
            return Err(OAuth2Error::MissingField("code_verifier"));
        }

        debug!(
            "received token exchange request (code: {}, verifier: {})",
            preview(code),
            preview(code_verifier)
        );

        let redirect_uri = self.config.redirect_uri();
        let mut params = HashMap::new();
        params.insert("grant_type", "authorization_code");
        params.insert("code", code);
        params.insert("client_id", self.config.client_id.as_str());
        params.insert("client_secret", self.config.client_secret.as_str());
        params.insert("redirect_uri", redirect_uri.as_str());
        params.insert("code_verifier", code_verifier);

        let response = self
            .http_client
            .post(&self.config.token_endpoint)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let description = response
                .json::<TokenErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error_description)
                .unwrap_or_else(|| TOKEN_EXCHANGE_FAILED.to_string());
            error!("token exchange rejected ({}): {}", status, description);
            return Err(OAuth2Error::ProviderRejected(description));
        }

        let tokens: TokenResponse = response
            .json()
            .await
            .map_err(|e| OAuth2Error::InvalidTokenResponse(e.to_string()))?;

        info!("successfully exchanged code for tokens");

        let user = match self.fetch_user_info(&tokens.access_token).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("user info lookup failed, continuing without profile: {}", e);
                ProfileInfo::new()
            }
        };

        Ok(ExchangeResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            user,
        })
    }

    /// Fetch the user profile using a bearer access token.
    pub async fn fetch_user_info(&self, access_token: &str) -> OAuth2Result<ProfileInfo> {
        let response = self
            .http_client
            .get(&self.config.userinfo_endpoint)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OAuth2Error::UserInfoFailed(error_text));
        }

        let profile: ProfileInfo = response
            .json()
            .await
            .map_err(|e| OAuth2Error::UserInfoFailed(e.to_string()))?;

        debug!("retrieved user info with {} fields", profile.len());
        Ok(profile)
    }
}

/// Truncated preview of an opaque credential, for debug-level logging only.
/// Never applied to the client secret, which is not logged at any level.
fn preview(value: &str) -> String {
    let visible: String = value.chars().take(10).collect();
    if value.chars().count() > 10 {
        format!("{}...", visible)
    } else {
        visible
    }
}
