use async_trait::async_trait;
use wordspark_core::config::WORD_GENERATION_TEMPERATURE;
use wordspark_core::error::ClientError;

/// Whether the text-model capability can serve requests at all.
///
/// Unavailability is a persistent disabled state, not a transient error, so
/// the reason travels with it for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable { reason: String },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Per-call knobs passed through to the capability.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: WORD_GENERATION_TEMPERATURE,
            max_tokens: None,
        }
    }
}

/// A conversational context held by the capability. Prior turns condition
/// later responses, which is what makes "generate more" prompts work.
#[async_trait]
pub trait ModelSession: Send {
    async fn respond(
        &mut self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ClientError>;
}

/// The opaque text-generation capability. Host-provided and non-deterministic;
/// everything the controller does is written against this seam so it can be
/// driven by a scripted fake in tests.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn availability(&self) -> Availability;

    async fn create_session(
        &self,
        instructions: &str,
    ) -> Result<Box<dyn ModelSession>, ClientError>;
}
