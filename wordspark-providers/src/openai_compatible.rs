use crate::request::{Body, HttpRequest};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiCompatibleChatConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

pub fn build_chat_completions_request(
    cfg: &OpenAiCompatibleChatConfig,
    messages: &[ChatMessage],
    temperature: f32,
    max_tokens: Option<u32>,
) -> HttpRequest {
    let url = join_url(&cfg.base_url, "/chat/completions");

    let mut payload = json!({
        "model": cfg.model,
        "messages": messages.iter().map(|m| json!({"role": m.role, "content": m.content})).collect::<Vec<_>>(),
        "temperature": temperature,
    });
    if let Some(max_tokens) = max_tokens {
        payload["max_tokens"] = json!(max_tokens);
    }

    HttpRequest {
        method: "POST".into(),
        url,
        headers: auth_headers(cfg),
        body: Body::Json(payload.to_string()),
    }
}

/// Lists the endpoint's models. Used as the availability probe: a reachable
/// endpoint that answers this is assumed able to generate.
pub fn build_models_request(cfg: &OpenAiCompatibleChatConfig) -> HttpRequest {
    HttpRequest {
        method: "GET".into(),
        url: join_url(&cfg.base_url, "/models"),
        headers: auth_headers(cfg),
        body: Body::Empty,
    }
}

fn auth_headers(cfg: &OpenAiCompatibleChatConfig) -> Vec<(String, String)> {
    vec![
        ("Content-Type".into(), "application/json".into()),
        ("Authorization".into(), format!("Bearer {}", cfg.api_key)),
    ]
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> OpenAiCompatibleChatConfig {
        OpenAiCompatibleChatConfig {
            base_url: "https://api.example.com/v1".into(),
            api_key: "k".into(),
            model: "gpt-4o-mini".into(),
        }
    }

    #[test]
    fn join_url_handles_trailing_slash() {
        assert_eq!(
            join_url("https://api.example.com/", "/chat/completions"),
            "https://api.example.com/chat/completions"
        );
        assert_eq!(
            join_url("https://api.example.com", "chat/completions"),
            "https://api.example.com/chat/completions"
        );
    }

    #[test]
    fn builds_authorized_json_request_with_temperature() {
        let req = build_chat_completions_request(
            &cfg(),
            &[ChatMessage::user("hi")],
            1.5,
            None,
        );

        assert_eq!(req.method, "POST");
        assert!(req.url.ends_with("/chat/completions"));
        assert_eq!(req.header("authorization"), Some("Bearer k"));
        match req.body {
            Body::Json(s) => {
                assert!(s.contains("\"temperature\":1.5"));
                assert!(!s.contains("max_tokens"));
            }
            _ => panic!("expected json"),
        }
    }

    #[test]
    fn includes_max_tokens_when_set() {
        let req = build_chat_completions_request(&cfg(), &[ChatMessage::user("hi")], 1.0, Some(256));
        match req.body {
            Body::Json(s) => assert!(s.contains("\"max_tokens\":256")),
            _ => panic!("expected json"),
        }
    }

    #[test]
    fn models_probe_is_an_authorized_get() {
        let req = build_models_request(&cfg());
        assert_eq!(req.method, "GET");
        assert!(req.url.ends_with("/models"));
        assert_eq!(req.header("authorization"), Some("Bearer k"));
        assert_eq!(req.body, Body::Empty);
    }
}
