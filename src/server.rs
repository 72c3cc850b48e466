use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, config, spotify::SpotifyClient, telegram::TelegramClient};

/// Optional outbound dependencies shared by every webhook request.
///
/// A client is `None` when its credentials were missing at startup; the
/// matching pipeline stage then degrades to a no-op.
#[derive(Clone, Default)]
pub struct AppState {
    pub spotify: Option<SpotifyClient>,
    pub telegram: Option<TelegramClient>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/webhook/telegram",
            post(api::telegram_webhook).layer(Extension(state)),
        )
}

pub async fn start_api_server(state: Arc<AppState>) -> Res<()> {
    let app = build_router(state);

    let addr = SocketAddr::from_str(&config::server_addr())?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
