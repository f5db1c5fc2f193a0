use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tunebridge_identity_oauth2::{OAuth2Client, OAuth2Config};

mod service;

use service::AppState;

/// Configuration for the tunebridge backend.
#[derive(Clone)]
pub struct AppConfig {
    pub google_client_id: String,
    pub google_client_secret: String,
    pub frontend_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            google_client_id: std::env::var("GOOGLE_CLIENT_ID")
                .context("GOOGLE_CLIENT_ID environment variable is required")?,
            google_client_secret: std::env::var("GOOGLE_CLIENT_SECRET")
                .context("GOOGLE_CLIENT_SECRET environment variable is required")?,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5173".to_string()),
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    info!("Starting tunebridge backend");

    let oauth2_config = OAuth2Config::google(
        config.google_client_id.clone(),
        config.google_client_secret.clone(),
        config.frontend_url.clone(),
    );
    let redirect_uri = oauth2_config.redirect_uri();

    let state = AppState {
        oauth2_client: Arc::new(OAuth2Client::new(oauth2_config)),
    };

    let app = service::app(state);

    let bind_addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!("Server running on http://{}", bind_addr);
    info!("OAuth2 redirect URI: {}", redirect_uri);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
