use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by the outbound API clients.
///
/// All of these are caught at the webhook orchestration boundary and logged;
/// none of them propagate to the webhook caller, which always receives 204.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required credentials are missing at startup. The affected client is
    /// not constructed and the matching feature degrades to a no-op.
    #[error("missing configuration: {0}")]
    Config(String),

    /// Spotify refused to issue a client-credentials token, or the token
    /// response could not be parsed.
    #[error("failed to obtain Spotify access token: status={status}, detail={detail}")]
    Authentication { status: u16, detail: String },

    /// Non-success or malformed response from Spotify or Telegram.
    #[error("{service} request failed: status={status}, detail={detail}")]
    Api {
        service: &'static str,
        status: u16,
        detail: String,
    },

    /// A request was rejected before being sent (blank caption, no target
    /// chat).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure or timeout before a response arrived.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
    pub channel_post: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramMessage {
    pub message_id: i64,
    pub text: Option<String>,
    pub caption: Option<String>,
    pub date: Option<i64>,
    pub chat: Option<TelegramChat>,
    pub audio: Option<TelegramAudio>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
    pub title: Option<String>,
    pub username: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramAudio {
    pub performer: Option<String>,
    pub title: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SpotifyAccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub acquired_at: i64,
}

impl SpotifyAccessToken {
    /// Absolute unix timestamp at which the token expires.
    pub fn expires_at(&self) -> i64 {
        self.acquired_at + self.expires_in as i64
    }

    /// Whether the token is expired, or will be within `buffer_seconds`.
    pub fn is_expired(&self, buffer_seconds: u64) -> bool {
        Utc::now().timestamp() >= self.expires_at() - buffer_seconds as i64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotifyTrackSummary {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub external_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackCandidate {
    pub raw_content: String,
    pub query: Option<String>,
    pub artist: Option<String>,
    pub title: Option<String>,
}
