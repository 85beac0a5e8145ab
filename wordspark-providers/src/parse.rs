use anyhow::{Context, anyhow};
use serde::Deserialize;
use wordspark_core::error::ClientError;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

pub fn parse_chat_completion(body: &[u8]) -> anyhow::Result<String> {
    let resp: ChatResponse = serde_json::from_slice(body).context("decode chat JSON")?;
    let content = resp
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| anyhow!("no content in chat completion response"))?;
    Ok(content)
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
    code: Option<String>,
}

/// Maps a non-2xx response onto the client error taxonomy.
///
/// Classification keys off the structured `error.code` field only. Anything
/// without a recognized code is a generic failure; we deliberately don't
/// sniff error message text.
pub fn classify_api_error(status: u16, body: &[u8]) -> ClientError {
    let parsed: ApiErrorBody = serde_json::from_slice(body).unwrap_or_default();

    if let Some(error) = parsed.error {
        match error.code.as_deref() {
            Some("context_length_exceeded") => return ClientError::ContextExhausted,
            Some("unsupported_language") => return ClientError::UnsupportedInput,
            _ => {}
        }
        if let Some(message) = error.message {
            return ClientError::Other(format!("status={status}: {message}"));
        }
    }

    ClientError::Other(format!(
        "status={status}: {}",
        String::from_utf8_lossy(body)
    ))
}
