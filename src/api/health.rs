use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe for the webhook service.
///
/// Reports the running crate version alongside the status so a deploy can
/// be verified from the monitoring side. Deliberately ignores the state of
/// the Spotify and Telegram clients; the service is considered healthy even
/// when it runs in degraded, credential-less mode.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
