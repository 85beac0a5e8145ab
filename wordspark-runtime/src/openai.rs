use async_trait::async_trait;
use wordspark_core::error::ClientError;
use wordspark_engine::traits::{Availability, GenerationOptions, ModelSession, TextModel};
use wordspark_providers::openai_compatible::{
    ChatMessage, OpenAiCompatibleChatConfig, build_chat_completions_request, build_models_request,
};
use wordspark_providers::parse::{classify_api_error, parse_chat_completion};
use wordspark_providers::runtime;

/// Text model backed by an OpenAI-compatible chat endpoint.
///
/// The stand-in for the host-provided on-device capability: sessions carry
/// the conversation history client-side and replay it on every call.
#[derive(Clone)]
pub struct OpenAiTextModel {
    cfg: OpenAiCompatibleChatConfig,
}

impl std::fmt::Debug for OpenAiTextModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTextModel")
            .field("base_url", &self.cfg.base_url)
            .field("model", &self.cfg.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiTextModel {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            cfg: OpenAiCompatibleChatConfig {
                base_url: base_url.into(),
                api_key: api_key.into(),
                model: model.into(),
            },
        }
    }
}

#[async_trait]
impl TextModel for OpenAiTextModel {
    async fn availability(&self) -> Availability {
        let req = build_models_request(&self.cfg);
        match runtime::execute(&req).await {
            Ok(resp) if (200..=299).contains(&resp.status) => Availability::Available,
            Ok(resp) => Availability::Unavailable {
                reason: format!("endpoint answered status {}", resp.status),
            },
            Err(e) => Availability::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    async fn create_session(
        &self,
        instructions: &str,
    ) -> Result<Box<dyn ModelSession>, ClientError> {
        Ok(Box::new(OpenAiSession {
            cfg: self.cfg.clone(),
            history: vec![ChatMessage::system(instructions)],
        }))
    }
}

struct OpenAiSession {
    cfg: OpenAiCompatibleChatConfig,
    history: Vec<ChatMessage>,
}

#[async_trait]
impl ModelSession for OpenAiSession {
    async fn respond(
        &mut self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ClientError> {
        self.history.push(ChatMessage::user(prompt));

        let req = build_chat_completions_request(
            &self.cfg,
            &self.history,
            options.temperature,
            options.max_tokens,
        );
        log::debug!("chat request: {req:?}");

        let resp = runtime::execute(&req)
            .await
            .map_err(|e| ClientError::Other(e.to_string()))?;

        if !(200..=299).contains(&resp.status) {
            // Failed turns don't join the history; the caller decides whether
            // to retry on this session or drop it.
            self.history.pop();
            return Err(classify_api_error(resp.status, &resp.body));
        }

        let content = match parse_chat_completion(&resp.body) {
            Ok(content) => content,
            Err(e) => {
                self.history.pop();
                return Err(ClientError::Other(e.to_string()));
            }
        };
        self.history.push(ChatMessage::assistant(content.clone()));
        Ok(content)
    }
}
