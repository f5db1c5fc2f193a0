//! OAuth2 configuration types.

use std::fmt;

const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Provider and client configuration for the token exchange.
///
/// Constructed once at startup and handed to [`OAuth2Client::new`]; no field
/// is mutated afterwards, so one value can back any number of concurrently
/// in-flight exchanges.
///
/// [`OAuth2Client::new`]: crate::OAuth2Client::new
#[derive(Clone)]
pub struct OAuth2Config {
    pub client_id: String,
    pub client_secret: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
    /// Base URL of the frontend that ran the authorization redirect. The
    /// redirect URI presented to the provider is this URL plus a trailing
    /// `/`, exactly as registered with the provider.
    pub frontend_url: String,
    pub http_timeout_seconds: u64,
}

impl OAuth2Config {
    /// Configuration pointed at Google's documented OAuth2 endpoints.
    pub fn google(client_id: String, client_secret: String, frontend_url: String) -> Self {
        Self {
            client_id,
            client_secret,
            token_endpoint: GOOGLE_TOKEN_ENDPOINT.to_string(),
            userinfo_endpoint: GOOGLE_USERINFO_ENDPOINT.to_string(),
            frontend_url,
            http_timeout_seconds: 30,
        }
    }

    pub fn with_http_timeout(mut self, seconds: u64) -> Self {
        self.http_timeout_seconds = seconds;
        self
    }

    /// The redirect URI sent with the token request. Must match what the
    /// frontend used during authorization: the frontend base URL with a
    /// trailing slash.
    pub fn redirect_uri(&self) -> String {
        format!("{}/", self.frontend_url)
    }
}

impl fmt::Debug for OAuth2Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_endpoint", &self.token_endpoint)
            .field("userinfo_endpoint", &self.userinfo_endpoint)
            .field("frontend_url", &self.frontend_url)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OAuth2Config {
        OAuth2Config::google(
            "test_client_id".to_string(),
            "test_secret".to_string(),
            "http://127.0.0.1:5173".to_string(),
        )
    }

    #[test]
    fn test_redirect_uri_has_trailing_slash() {
        let config = test_config();
        assert_eq!(config.redirect_uri(), "http://127.0.0.1:5173/");
    }

    #[test]
    fn test_google_defaults() {
        let config = test_config();
        assert_eq!(config.token_endpoint, "https://oauth2.googleapis.com/token");
        assert_eq!(
            config.userinfo_endpoint,
            "https://www.googleapis.com/oauth2/v2/userinfo"
        );
        assert_eq!(config.http_timeout_seconds, 30);

        let config = config.with_http_timeout(5);
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[test]
    fn test_debug_redacts_client_secret() {
        let rendered = format!("{:?}", test_config());
        assert!(!rendered.contains("test_secret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("test_client_id"));
    }
}
