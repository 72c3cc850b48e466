use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use spotify_linker::{
    api::webhook::SPOTIFY_LINK_PREFIX,
    server::{AppState, build_router},
    spotify::SpotifyClient,
    telegram::TelegramClient,
};

const TRACK_URL: &str = "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC";

#[derive(Clone, Copy)]
enum SearchBehavior {
    Match,
    ServerError,
    Unauthorized,
}

/// In-process stand-in for the Spotify and Telegram APIs.
///
/// Serves the token, search, and editMessageCaption endpoints on a local
/// port and counts every call so tests can assert how often the pipeline
/// actually went out.
#[derive(Clone)]
struct Upstream {
    tokens: Arc<AtomicUsize>,
    searches: Arc<AtomicUsize>,
    edits: Arc<AtomicUsize>,
    search_behavior: SearchBehavior,
}

impl Upstream {
    fn new(search_behavior: SearchBehavior) -> Self {
        Self {
            tokens: Arc::new(AtomicUsize::new(0)),
            searches: Arc::new(AtomicUsize::new(0)),
            edits: Arc::new(AtomicUsize::new(0)),
            search_behavior,
        }
    }
}

async fn token_endpoint(State(upstream): State<Upstream>) -> Json<Value> {
    upstream.tokens.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "access_token": "upstream-token",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
}

async fn search_endpoint(State(upstream): State<Upstream>) -> (StatusCode, Json<Value>) {
    upstream.searches.fetch_add(1, Ordering::SeqCst);
    match upstream.search_behavior {
        SearchBehavior::Match => (
            StatusCode::OK,
            Json(json!({
                "tracks": {
                    "items": [{
                        "id": "4uLU6hMCjMI75M1A2tKUQC",
                        "name": "Never Gonna Give You Up",
                        "artists": [{"name": "Rick Astley"}],
                        "external_urls": {"spotify": TRACK_URL}
                    }]
                }
            })),
        ),
        SearchBehavior::ServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": {"status": 500, "message": "upstream exploded"}})),
        ),
        SearchBehavior::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"status": 401, "message": "The access token expired"}})),
        ),
    }
}

async fn edit_caption_endpoint(State(upstream): State<Upstream>) -> Json<Value> {
    upstream.edits.fetch_add(1, Ordering::SeqCst);
    Json(json!({"ok": true, "result": {"message_id": 77}}))
}

async fn spawn_upstream(upstream: Upstream) -> String {
    let app = Router::new()
        .route("/api/token", post(token_endpoint))
        .route("/v1/search", get(search_endpoint))
        .route("/bottesttoken/editMessageCaption", post(edit_caption_endpoint))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    format!("http://{addr}")
}

fn linker_app(upstream_url: &str) -> Router {
    let spotify = SpotifyClient::new(
        "client-id".to_string(),
        "client-secret".to_string(),
        format!("{upstream_url}/v1"),
        format!("{upstream_url}/api/token"),
    )
    .unwrap();
    let telegram = TelegramClient::new(
        "testtoken".to_string(),
        "-200".to_string(),
        upstream_url.to_string(),
    )
    .unwrap();

    build_router(Arc::new(AppState {
        spotify: Some(spotify),
        telegram: Some(telegram),
    }))
}

fn channel_post_update(caption: &str) -> Value {
    json!({
        "update_id": 42,
        "channel_post": {
            "message_id": 77,
            "caption": caption,
            "chat": {"id": -200, "type": "channel"}
        }
    })
}

async fn deliver(app: &Router, payload: Value) -> StatusCode {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/webhook/telegram")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    response.status()
}

#[tokio::test]
async fn test_matched_post_edits_caption_exactly_once() {
    let upstream = Upstream::new(SearchBehavior::Match);
    let url = spawn_upstream(upstream.clone()).await;
    let app = linker_app(&url);

    let status = deliver(&app, channel_post_update("Rick Astley - Never Gonna Give You Up")).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(upstream.searches.load(Ordering::SeqCst), 1);
    assert_eq!(upstream.edits.load(Ordering::SeqCst), 1);

    // redelivery after the caption already carries the link
    let linked = format!("Rick Astley - Never Gonna Give You Up\n{SPOTIFY_LINK_PREFIX}{TRACK_URL}");
    let status = deliver(&app, channel_post_update(&linked)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(upstream.edits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_token_is_cached_across_deliveries() {
    let upstream = Upstream::new(SearchBehavior::Match);
    let url = spawn_upstream(upstream.clone()).await;
    let app = linker_app(&url);

    deliver(&app, channel_post_update("Rick Astley - Never Gonna Give You Up")).await;
    deliver(&app, channel_post_update("Daft Punk - Around the World")).await;

    assert_eq!(upstream.searches.load(Ordering::SeqCst), 2);
    assert_eq!(upstream.tokens.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_search_failure_is_swallowed() {
    let upstream = Upstream::new(SearchBehavior::ServerError);
    let url = spawn_upstream(upstream.clone()).await;
    let app = linker_app(&url);

    let status = deliver(&app, channel_post_update("Rick Astley - Never Gonna Give You Up")).await;

    // the failed lookup is logged, not surfaced; no edit goes out
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(upstream.searches.load(Ordering::SeqCst), 1);
    assert_eq!(upstream.edits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unauthorized_search_drops_cached_token() {
    let upstream = Upstream::new(SearchBehavior::Unauthorized);
    let url = spawn_upstream(upstream.clone()).await;
    let app = linker_app(&url);

    let first = deliver(&app, channel_post_update("Rick Astley - Never Gonna Give You Up")).await;
    let second = deliver(&app, channel_post_update("Rick Astley - Never Gonna Give You Up")).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NO_CONTENT);
    assert_eq!(upstream.edits.load(Ordering::SeqCst), 0);
    // a 401 invalidates the cached token, so each delivery reauthenticates
    assert_eq!(upstream.tokens.load(Ordering::SeqCst), 2);
}
