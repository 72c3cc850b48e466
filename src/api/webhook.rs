use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode};

use crate::{
    info,
    server::AppState,
    spotify::SpotifyClient,
    telegram::TelegramClient,
    types::{SpotifyTrackSummary, TelegramMessage, TelegramUpdate, TrackCandidate},
    utils::{build_track_candidate, extract_track_query, message_text, split_artist_title},
    warning,
};

/// Prefix put in front of the appended Spotify link line.
pub const SPOTIFY_LINK_PREFIX: &str = "🎵 ";

/// Handles one Telegram update delivery.
///
/// Runs a single pass through the pipeline: pick the relevant message,
/// extract text, build a track candidate, search Spotify, patch the caption.
/// Every stage may short-circuit; the response is 204 regardless of the
/// internal outcome so Telegram does not retry the delivery.
pub async fn telegram_webhook(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<TelegramUpdate>,
) -> StatusCode {
    let message = extract_relevant_message(&payload);
    info!(
        "Received Telegram webhook payload: update_id={}, message_id={}",
        payload.update_id,
        message
            .map(|m| m.message_id.to_string())
            .unwrap_or_else(|| "<none>".to_string())
    );

    let Some(message) = message else {
        info!("No Telegram message or channel post found in update");
        return StatusCode::NO_CONTENT;
    };

    if state.spotify.is_none() {
        warning!("Spotify client unavailable; webhook will skip Spotify lookups");
    }

    let content = message_text(message);
    match &content {
        Some(text) => info!("Extracted message content: {}", text),
        None => {
            // a present-but-blank caption gets its own message so operators
            // can tell it apart from a contentless update
            if message.caption.as_deref().is_some_and(|c| !c.is_empty()) {
                info!("Telegram caption after normalization is empty");
            } else {
                info!("Telegram message contains no textual content");
            }
        }
    }

    if let Some(query) = extract_track_query(content.as_deref()) {
        info!("Normalized track query: {}", query);
        if let Some((artist, title)) = split_artist_title(&query) {
            info!("Parsed artist/title: {} - {}", artist, title);
        }
    }

    let candidate = build_track_candidate(content.as_deref());
    log_track_candidate(candidate.as_ref());

    let Some(candidate) = candidate else {
        return StatusCode::NO_CONTENT;
    };
    if candidate.query.is_none() {
        return StatusCode::NO_CONTENT;
    }
    let Some(spotify) = &state.spotify else {
        return StatusCode::NO_CONTENT;
    };

    if let Some(summary) = lookup_candidate_on_spotify(spotify, &candidate).await {
        if let Some(telegram) = &state.telegram {
            update_telegram_caption_with_spotify_link(telegram, &summary, Some(message)).await;
        }
    }

    StatusCode::NO_CONTENT
}

/// Returns the channel post or regular message contained in the update.
pub fn extract_relevant_message(payload: &TelegramUpdate) -> Option<&TelegramMessage> {
    payload.channel_post.as_ref().or(payload.message.as_ref())
}

pub fn log_track_candidate(candidate: Option<&TrackCandidate>) {
    match candidate {
        None => info!("No track candidate could be built from the message"),
        Some(candidate) => info!(
            "Track candidate: query={:?} artist={:?} title={:?}",
            candidate.query, candidate.artist, candidate.title
        ),
    }
}

/// Searches Spotify for the candidate and logs the outcome.
///
/// Any error during the search is swallowed and logged, treated as "no
/// match" so the request still finishes with 204.
pub async fn lookup_candidate_on_spotify(
    client: &SpotifyClient,
    candidate: &TrackCandidate,
) -> Option<SpotifyTrackSummary> {
    let Some(query) = candidate.query.as_deref() else {
        info!("Spotify lookup skipped because normalized query is empty");
        return None;
    };

    match client.search_track(query, 1).await {
        Ok(Some(summary)) => {
            let artists = if summary.artists.is_empty() {
                "<unknown artist>".to_string()
            } else {
                summary.artists.join(", ")
            };
            let url = if summary.external_url.is_empty() {
                "<no url>"
            } else {
                summary.external_url.as_str()
            };
            info!("Spotify match found: {} - {} ({})", artists, summary.name, url);
            Some(summary)
        }
        Ok(None) => {
            info!("No Spotify match found for query: {}", query);
            None
        }
        Err(e) => {
            warning!("Spotify lookup failed for query {}: {}", query, e);
            None
        }
    }
}

/// Returns the best link for a track summary.
///
/// Prefers the external URL reported by Spotify, falls back to a synthesized
/// `open.spotify.com` URL from the track id, and returns an empty string
/// when neither is available.
pub fn build_spotify_link(summary: &SpotifyTrackSummary) -> String {
    if !summary.external_url.is_empty() {
        return summary.external_url.clone();
    }
    if !summary.id.is_empty() {
        return format!("https://open.spotify.com/track/{}", summary.id);
    }
    String::new()
}

/// Appends the Spotify link line to a caption, idempotently.
///
/// Returns `None` when no link can be derived (the caller skips the edit).
/// When the caption already contains the link line or the bare link, it is
/// returned unchanged, so re-processing the same message never duplicates
/// the link.
pub fn build_caption_with_spotify_link(
    existing: &str,
    summary: &SpotifyTrackSummary,
) -> Option<String> {
    let link = build_spotify_link(summary);
    if link.is_empty() {
        return None;
    }

    let line = format!("{SPOTIFY_LINK_PREFIX}{link}");
    if existing.contains(&line) || existing.contains(&link) {
        return Some(existing.to_string());
    }

    if existing.is_empty() {
        return Some(line);
    }
    if existing.ends_with('\n') {
        return Some(format!("{existing}{line}"));
    }
    Some(format!("{}\n{}", existing.trim_end(), line))
}

/// Edits the source message caption to carry the Spotify link.
///
/// Skips the edit when no link is available, when the source message is
/// missing, or when the patched caption equals the existing one. Telegram
/// API failures are swallowed and logged.
pub async fn update_telegram_caption_with_spotify_link(
    client: &TelegramClient,
    summary: &SpotifyTrackSummary,
    source_message: Option<&TelegramMessage>,
) {
    let link = build_spotify_link(summary);
    if link.is_empty() {
        info!("Spotify link unavailable; skipping Telegram caption update");
        return;
    }

    let Some(message) = source_message else {
        warning!("Cannot update Telegram caption because source message is missing");
        return;
    };

    let existing = message.caption.as_deref().unwrap_or("");
    let Some(patched) = build_caption_with_spotify_link(existing, summary) else {
        return;
    };
    if patched == existing {
        info!("Spotify link already present in Telegram caption");
        return;
    }

    let chat_id = message.chat.as_ref().map(|chat| chat.id.to_string());
    match client
        .edit_message_caption(message.message_id, &patched, chat_id.as_deref())
        .await
    {
        Ok(_) => info!("Updated Telegram caption with Spotify link"),
        Err(e) => warning!("Failed to edit Telegram message caption: {}", e),
    }
}
