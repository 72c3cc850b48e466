//! Spotify Linker Webhook Service Library
//!
//! This library provides the building blocks for a small web service that
//! receives Telegram webhook updates, derives a song query from the message
//! content, looks the track up on Spotify, and edits the original message
//! caption to append a Spotify link.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the webhook server
//! - `config` - Configuration management and environment variables
//! - `management` - In-process caching of the Spotify access token
//! - `server` - HTTP server wiring and shared application state
//! - `spotify` - Spotify Web API client (client-credentials flow)
//! - `telegram` - Telegram Bot API client
//! - `types` - Data structures, payload schemas, and error types
//! - `utils` - Pure text-extraction and normalization helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use spotify_linker::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotify_linker::Res<()> {
//!     config::load_env().await?;
//!     let state = Arc::new(server::AppState::default());
//!     server::start_api_server(state).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod telegram;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates throughout the request
/// handling pipeline. Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully,
/// such as client initialization at startup. Accepts the same arguments as
/// `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Immediately terminates the program with exit code 1, so it should only be
/// used for fatal startup errors where recovery is not possible. Webhook
/// request failures are never fatal; use [`warning!`] for those instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a degraded client configuration or a
/// swallowed outbound API failure. Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
