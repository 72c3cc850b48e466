//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! webhook service: app-only authentication and track search. It handles the
//! HTTP communication, token caching, and the lenient parsing of search
//! results into [`crate::types::SpotifyTrackSummary`] values.
//!
//! ## Architecture
//!
//! ```text
//! Webhook Orchestration
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     └── Track Search (first-match summary)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The client uses the OAuth 2.0 client-credentials grant: no user consent,
//! no refresh token, just the application's id/secret exchanged for a
//! short-lived bearer token. The token is cached in process via
//! [`crate::management::TokenCache`] and refreshed when it is within a small
//! buffer of its expiry. See [`auth`].
//!
//! ## Error Handling Philosophy
//!
//! - Token issuance failures surface as [`ClientError::Authentication`].
//! - Non-success or structurally invalid search responses surface as
//!   [`ClientError::Api`] with the best-available error detail.
//! - Partially malformed search payloads (missing `tracks`, non-array
//!   `items`, non-list `artists`, ...) degrade to empty values or a `None`
//!   result instead of failing; the upstream shape is not trusted. See
//!   [`search`].
//!
//! All of these are swallowed and logged at the webhook boundary; a Spotify
//! failure never fails the inbound request.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - client-credentials token exchange (HTTP Basic)
//! - `GET {base_url}/search?q=&type=track&limit=` - track search (Bearer)

pub mod auth;
pub mod search;

use std::time::Duration;

use reqwest::Client;

use crate::{config, management::TokenCache, types::ClientError};

/// Timeout applied to every outbound Spotify call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the Spotify Web API using the client-credentials flow.
///
/// Holds a long-lived `reqwest::Client` with connection reuse and a bounded
/// timeout, plus the shared token cache. Cloning is cheap and clones share
/// the same cache.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) base_url: String,
    pub(crate) token_url: String,
    pub(crate) http: Client,
    pub(crate) token_cache: TokenCache,
}

impl SpotifyClient {
    /// Creates a client from explicit credentials and endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if either credential is empty, or
    /// [`ClientError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(
        client_id: String,
        client_secret: String,
        base_url: String,
        token_url: String,
    ) -> Result<Self, ClientError> {
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(ClientError::Config(
                "Spotify client credentials are required".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client_id,
            client_secret,
            base_url,
            token_url,
            http,
            token_cache: TokenCache::new(),
        })
    }

    /// Creates a client from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] naming the missing variable when
    /// `SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET` is unset.
    pub fn from_env() -> Result<Self, ClientError> {
        let client_id = config::spotify_client_id()
            .ok_or_else(|| ClientError::Config("SPOTIFY_CLIENT_ID must be set".to_string()))?;
        let client_secret = config::spotify_client_secret()
            .ok_or_else(|| ClientError::Config("SPOTIFY_CLIENT_SECRET must be set".to_string()))?;

        Self::new(
            client_id,
            client_secret,
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
        )
    }
}
