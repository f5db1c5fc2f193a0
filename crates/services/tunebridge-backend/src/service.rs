//! HTTP surface for the token exchange.

use axum::http::{Method, StatusCode};
use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tunebridge_identity_oauth2::{ExchangeResponse, OAuth2Client, OAuth2Error};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub oauth2_client: Arc<OAuth2Client>,
}

/// Inbound token exchange request from the frontend.
///
/// Absent fields deserialize as empty strings and are rejected by the
/// exchange core before any provider call.
#[derive(Debug, Deserialize)]
pub struct TokenExchangeRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub code_verifier: String,
}

/// Error body in the shape the frontend consumes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/google/token", post(exchange_google_token))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Exchange an authorization code and PKCE verifier for tokens.
async fn exchange_google_token(
    State(state): State<AppState>,
    Json(request): Json<TokenExchangeRequest>,
) -> Result<Json<ExchangeResponse>, (StatusCode, Json<ErrorBody>)> {
    info!("handling token exchange request");

    state
        .oauth2_client
        .exchange_code(&request.code, &request.code_verifier)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Map exchange failures onto HTTP statuses: caller-side problems are 400,
/// infrastructure problems reaching the provider are 502. Upstream detail
/// beyond the provider's own rejection message stays in the server logs.
fn error_response(err: OAuth2Error) -> (StatusCode, Json<ErrorBody>) {
    match err {
        OAuth2Error::MissingField(field) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                detail: format!("missing required field: {}", field),
            }),
        ),
        OAuth2Error::ProviderRejected(description) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                detail: description,
            }),
        ),
        other => {
            error!("token exchange failed upstream: {}", other);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    detail: "Identity provider request failed".to_string(),
                }),
            )
        }
    }
}
