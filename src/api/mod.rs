//! # API Module
//!
//! HTTP endpoints for the webhook server.
//!
//! ## Endpoints
//!
//! - [`webhook::telegram_webhook`] - Receives Telegram update deliveries and
//!   drives the extract → search → caption-patch pipeline. Always answers
//!   204 so Telegram does not re-deliver on internal failures; only an
//!   unparseable update body is rejected by the framework.
//! - [`health`] - Health check returning application status and version for
//!   monitoring systems.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework. Handlers receive
//! the shared [`crate::server::AppState`] through an `Extension` layer and
//! are wired up in [`crate::server::build_router`].

mod health;
pub mod webhook;

pub use health::health;
pub use webhook::telegram_webhook;
