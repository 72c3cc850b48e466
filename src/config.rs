//! Configuration management for the Spotify Linker webhook service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials are optional at
//! startup: when one is missing the matching client degrades to a no-op and
//! a warning is logged, but the service still starts and keeps answering
//! webhook deliveries. API endpoint accessors carry production defaults so
//! they only need to be set when pointing at a test double.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Looks for a `.env` file in the platform-specific local data directory
/// under `spotify-linker/.env`, creating the directory if needed, and falls
/// back to a `.env` in the working directory. A missing file is not an
/// error; real environment variables always take precedence.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotify-linker/.env`
/// - macOS: `~/Library/Application Support/spotify-linker/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-linker/.env`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-linker/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else {
        // local .env for development setups
        let _ = dotenv::dotenv();
    }

    Ok(())
}

/// Returns the address the webhook server binds to.
///
/// Reads the `SERVER_ADDRESS` environment variable, defaulting to
/// `0.0.0.0:8000` when unset.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string())
}

/// Returns the Telegram bot token, if configured.
///
/// Reads the `TELEGRAM_BOT_TOKEN` environment variable. When absent or
/// empty, the Telegram client is not constructed and caption edits are
/// skipped.
pub fn telegram_bot_token() -> Option<String> {
    env::var("TELEGRAM_BOT_TOKEN").ok().filter(|v| !v.is_empty())
}

/// Returns the default Telegram channel id, if configured.
///
/// Reads the `TELEGRAM_CHANNEL_ID` environment variable. Used as the edit
/// target when the inbound message carries no chat of its own.
pub fn telegram_channel_id() -> Option<String> {
    env::var("TELEGRAM_CHANNEL_ID")
        .ok()
        .filter(|v| !v.is_empty())
}

/// Returns the Spotify API client ID, if configured.
///
/// Reads the `SPOTIFY_CLIENT_ID` environment variable, obtained when
/// registering the application with Spotify's developer platform.
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_CLIENT_ID").ok().filter(|v| !v.is_empty())
}

/// Returns the Spotify API client secret, if configured.
///
/// Reads the `SPOTIFY_CLIENT_SECRET` environment variable.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Option<String> {
    env::var("SPOTIFY_CLIENT_SECRET")
        .ok()
        .filter(|v| !v.is_empty())
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, defaulting to the
/// production endpoint `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable, defaulting to
/// `https://accounts.spotify.com/api/token`. Used for the client-credentials
/// grant.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Telegram Bot API base URL.
///
/// Reads the `TELEGRAM_API_URL` environment variable, defaulting to
/// `https://api.telegram.org`.
pub fn telegram_apiurl() -> String {
    env::var("TELEGRAM_API_URL").unwrap_or_else(|_| "https://api.telegram.org".to_string())
}
