//! Google OAuth2 token exchange with PKCE support.
//!
//! This crate implements the confidential half of the Authorization Code flow
//! with PKCE (Proof Key for Code Exchange): the browser frontend obtains an
//! authorization code and a code verifier, and this crate exchanges both,
//! together with the client secret that never leaves the backend, for an
//! access token, an optional refresh token, and a best-effort user profile.

mod client;
mod config;
mod error;
mod types;


pub use client::OAuth2Client;
pub use config::OAuth2Config;
pub use error::{OAuth2Error, OAuth2Result};
pub use types::{ExchangeResponse, ProfileInfo, TokenErrorBody, TokenResponse};
