use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::StatusCode;
use serde_json::Value;

use crate::types::{ClientError, SpotifyAccessToken};

use super::SpotifyClient;

/// Seconds subtracted from the token expiry when deciding whether the
/// cached token is still usable.
pub const TOKEN_EXPIRY_BUFFER_SECS: u64 = 5;

impl SpotifyClient {
    /// Returns a valid client-credentials access token.
    ///
    /// The cached token is reused as long as it is present, a refresh is not
    /// forced, and it does not expire within `buffer_seconds`. Otherwise a
    /// fresh token is requested and replaces the cache.
    ///
    /// # Arguments
    ///
    /// * `force_refresh` - Bypass the cache and request a new token
    /// * `buffer_seconds` - Expiry margin; [`TOKEN_EXPIRY_BUFFER_SECS`] is
    ///   the usual value
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Authentication`] when the token endpoint
    /// answers non-200 or with malformed JSON, or [`ClientError::Transport`]
    /// on network failure.
    pub async fn get_access_token(
        &self,
        force_refresh: bool,
        buffer_seconds: u64,
    ) -> Result<SpotifyAccessToken, ClientError> {
        if !force_refresh {
            if let Some(token) = self.token_cache.get().await {
                if !token.is_expired(buffer_seconds) {
                    return Ok(token);
                }
            }
        }

        let token = self.request_client_credentials_token().await?;
        self.token_cache.store(token.clone()).await;
        Ok(token)
    }

    /// Performs the client-credentials grant against the token endpoint.
    ///
    /// Sends the application's id/secret as HTTP Basic authorization with a
    /// `grant_type=client_credentials` form body, as specified by the OAuth
    /// 2.0 client-credentials flow.
    async fn request_client_credentials_token(&self) -> Result<SpotifyAccessToken, ClientError> {
        let authorization = STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));

        let response = self
            .http
            .post(&self.token_url)
            .header("Authorization", format!("Basic {authorization}"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|payload| {
                    payload["error_description"]
                        .as_str()
                        .or_else(|| payload["error"].as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status.to_string()
                    } else {
                        body.clone()
                    }
                });

            return Err(ClientError::Authentication {
                status: status.as_u16(),
                detail,
            });
        }

        let payload: Value = response.json().await.map_err(|_| {
            ClientError::Authentication {
                status: status.as_u16(),
                detail: "token response was not valid JSON".to_string(),
            }
        })?;

        let access_token = payload["access_token"]
            .as_str()
            .ok_or_else(|| ClientError::Authentication {
                status: status.as_u16(),
                detail: "token response is missing access_token".to_string(),
            })?
            .to_string();

        Ok(SpotifyAccessToken {
            access_token,
            token_type: payload["token_type"].as_str().unwrap_or("Bearer").to_string(),
            expires_in: payload["expires_in"].as_u64().unwrap_or(3600),
            acquired_at: Utc::now().timestamp(),
        })
    }
}
