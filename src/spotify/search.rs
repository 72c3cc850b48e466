use reqwest::StatusCode;
use serde_json::Value;

use crate::types::{ClientError, SpotifyTrackSummary};

use super::SpotifyClient;
use super::auth::TOKEN_EXPIRY_BUFFER_SECS;

impl SpotifyClient {
    /// Searches Spotify for a track and returns the first match, if any.
    ///
    /// Obtains a valid access token, issues a `GET /search` request with
    /// `q={query}&type=track&limit={limit}`, and parses the first entry of
    /// `tracks.items` into a summary.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(summary))` - first parseable item of the result list
    /// - `Ok(None)` - response was well-formed but contained no usable item
    ///   (missing `tracks`, non-array `items`, or no object elements)
    /// - `Err(_)` - authentication failure, network failure, non-200
    ///   response, or a response that is not a JSON object
    ///
    /// # Error Detail
    ///
    /// For a non-200 response the error carries the best-available detail:
    /// the explicit `error.message` field when present, else the raw body,
    /// else the status line. A 401 additionally invalidates the cached
    /// token, so the next call reauthenticates instead of retrying a token
    /// Spotify no longer accepts.
    pub async fn search_track(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Option<SpotifyTrackSummary>, ClientError> {
        let token = self.get_access_token(false, TOKEN_EXPIRY_BUFFER_SECS).await?;

        let api_url = format!("{}/search", self.base_url);
        let limit = limit.to_string();
        let response = self
            .http
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .header(
                "Authorization",
                format!("{} {}", token.token_type, token.access_token),
            )
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            if status == StatusCode::UNAUTHORIZED {
                // token was revoked early; drop it so the next call refreshes
                self.token_cache.clear().await;
            }

            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|payload| payload["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status.to_string()
                    } else {
                        body.clone()
                    }
                });

            return Err(ClientError::Api {
                service: "spotify",
                status: status.as_u16(),
                detail,
            });
        }

        let payload: Value = response.json().await.map_err(|_| ClientError::Api {
            service: "spotify",
            status: status.as_u16(),
            detail: "search response was not valid JSON".to_string(),
        })?;

        if !payload.is_object() {
            return Err(ClientError::Api {
                service: "spotify",
                status: status.as_u16(),
                detail: "search response had unexpected format".to_string(),
            });
        }

        Ok(parse_track_summary(&payload))
    }
}

/// Extracts the first track of a search response into a summary.
///
/// The upstream payload shape is not trusted: a missing `tracks` section or
/// a non-array `items` yields `None`, non-object items are skipped, a
/// non-array `artists` field degrades to an empty artist list, and a
/// non-object `external_urls` degrades to an empty URL. Absent `id`/`name`
/// fields default to empty strings.
pub fn parse_track_summary(payload: &Value) -> Option<SpotifyTrackSummary> {
    let tracks = payload.get("tracks")?.as_object()?;
    let items = tracks.get("items")?.as_array()?;
    let first = items.iter().find_map(|item| item.as_object())?;

    let artists = match first.get("artists").and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .filter_map(|artist| artist.get("name"))
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    let external_url = first
        .get("external_urls")
        .and_then(Value::as_object)
        .and_then(|urls| urls.get("spotify"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Some(SpotifyTrackSummary {
        id: first
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        name: first
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        artists,
        external_url,
    })
}
