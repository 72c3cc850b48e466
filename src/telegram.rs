//! Telegram Bot API client.
//!
//! Covers the two calls the service needs: posting a message to the
//! configured channel and editing the caption of an existing message. Both
//! follow the same response contract: HTTP 200 with a JSON object whose `ok`
//! field is `true`; anything else is a [`ClientError::Api`].

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use crate::{config, types::ClientError};

/// Timeout applied to every outbound Telegram call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the Telegram Bot API bound to one bot token.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    bot_token: String,
    channel_id: String,
    base_url: String,
    http: Client,
}

impl TelegramClient {
    /// Creates a client from an explicit token, default channel, and API
    /// base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the bot token is empty, or
    /// [`ClientError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(
        bot_token: String,
        channel_id: String,
        base_url: String,
    ) -> Result<Self, ClientError> {
        if bot_token.is_empty() {
            return Err(ClientError::Config(
                "Telegram bot token is required".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            bot_token,
            channel_id,
            base_url,
            http,
        })
    }

    /// Creates a client from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when `TELEGRAM_BOT_TOKEN` is unset.
    pub fn from_env() -> Result<Self, ClientError> {
        let bot_token = config::telegram_bot_token()
            .ok_or_else(|| ClientError::Config("TELEGRAM_BOT_TOKEN must be set".to_string()))?;
        let channel_id = config::telegram_channel_id().unwrap_or_default();

        Self::new(bot_token, channel_id, config::telegram_apiurl())
    }

    /// Posts a message to the configured channel.
    pub async fn send_message(
        &self,
        text: &str,
        disable_web_page_preview: bool,
    ) -> Result<Value, ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "Telegram messages must contain non-empty text".to_string(),
            ));
        }
        if self.channel_id.is_empty() {
            return Err(ClientError::InvalidRequest(
                "a channel id is required to send a Telegram message".to_string(),
            ));
        }

        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let payload = json!({
            "chat_id": self.channel_id,
            "text": text,
            "disable_web_page_preview": disable_web_page_preview,
        });

        self.post("sendMessage", &url, &payload).await
    }

    /// Edits the caption of an existing message.
    ///
    /// The target chat is `chat_id` when given, otherwise the configured
    /// channel id. The caption is trimmed before sending and must not be
    /// blank.
    pub async fn edit_message_caption(
        &self,
        message_id: i64,
        caption: &str,
        chat_id: Option<&str>,
    ) -> Result<Value, ClientError> {
        let caption = caption.trim();
        if caption.is_empty() {
            return Err(ClientError::InvalidRequest(
                "Telegram captions must contain non-empty text".to_string(),
            ));
        }

        let target_chat = match chat_id {
            Some(chat) => chat.to_string(),
            None if !self.channel_id.is_empty() => self.channel_id.clone(),
            None => {
                return Err(ClientError::InvalidRequest(
                    "a chat_id is required to edit a Telegram message caption".to_string(),
                ));
            }
        };

        let url = format!("{}/bot{}/editMessageCaption", self.base_url, self.bot_token);
        let payload = json!({
            "chat_id": target_chat,
            "message_id": message_id,
            "caption": caption,
        });

        self.post("editMessageCaption", &url, &payload).await
    }

    // shared request/response contract for Bot API methods
    async fn post(
        &self,
        method: &'static str,
        url: &str,
        payload: &Value,
    ) -> Result<Value, ClientError> {
        let response = self.http.post(url).json(payload).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                service: "telegram",
                status: status.as_u16(),
                detail: format!("{method} failed: {body}"),
            });
        }

        let payload: Value = response.json().await.map_err(|_| ClientError::Api {
            service: "telegram",
            status: status.as_u16(),
            detail: format!("{method} response was not valid JSON"),
        })?;

        if !payload.is_object() {
            return Err(ClientError::Api {
                service: "telegram",
                status: status.as_u16(),
                detail: format!("{method} response had unexpected structure"),
            });
        }

        if !payload["ok"].as_bool().unwrap_or(false) {
            let description = payload["description"]
                .as_str()
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::Api {
                service: "telegram",
                status: status.as_u16(),
                detail: format!("{method} failed: {description}"),
            });
        }

        Ok(payload)
    }
}
