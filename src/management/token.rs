use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::SpotifyAccessToken;

/// Shared in-process cache for the Spotify client-credentials token.
///
/// The cache is read-then-conditionally-written per request. Concurrent
/// requests may race to refresh an expired token and issue duplicate token
/// requests; token issuance is idempotent, so the race is tolerated rather
/// than serialized. Tokens are never persisted.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<Mutex<Option<SpotifyAccessToken>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<SpotifyAccessToken> {
        self.inner.lock().await.clone()
    }

    pub async fn store(&self, token: SpotifyAccessToken) {
        *self.inner.lock().await = Some(token);
    }

    pub async fn clear(&self) {
        *self.inner.lock().await = None;
    }
}
