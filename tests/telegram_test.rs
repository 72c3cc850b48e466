use spotify_linker::telegram::TelegramClient;
use spotify_linker::types::ClientError;

fn client(bot_token: &str, channel_id: &str) -> Result<TelegramClient, ClientError> {
    TelegramClient::new(
        bot_token.to_string(),
        channel_id.to_string(),
        "https://api.telegram.org".to_string(),
    )
}

#[test]
fn test_client_requires_bot_token() {
    assert!(matches!(client("", "-100"), Err(ClientError::Config(_))));
}

#[test]
fn test_client_creates_with_bot_token() {
    assert!(client("123:abc", "-100").is_ok());
}

#[tokio::test]
async fn test_send_message_rejects_blank_text() {
    let telegram = client("123:abc", "-100").unwrap();

    let result = telegram.send_message("   ", false).await;

    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_send_message_requires_channel_id() {
    let telegram = client("123:abc", "").unwrap();

    let result = telegram.send_message("hello", false).await;

    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_edit_caption_rejects_blank_caption() {
    let telegram = client("123:abc", "-100").unwrap();

    let result = telegram.edit_message_caption(1, "   ", None).await;

    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_edit_caption_requires_some_chat_target() {
    let telegram = client("123:abc", "").unwrap();

    // no explicit chat and no configured channel, nothing to address
    let result = telegram.edit_message_caption(1, "caption", None).await;

    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
}
