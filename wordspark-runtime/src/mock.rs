use async_trait::async_trait;
use wordspark_core::error::ClientError;
use wordspark_engine::traits::{Availability, GenerationOptions, ModelSession, TextModel};

// Canned per-turn responses. Later turns overlap earlier ones on purpose so
// the accumulator's dedup path gets exercised in offline runs.
const CANNED_TURNS: &[&str] = &[
    "fruit, red, berry, sweet, seed, jam",
    "Fruit, juicy, smoothie, summer, shortcake",
    "garden, vine, harvest, ripe, berry",
    "dessert, pie, preserve, compote",
    "field, picker, basket, season",
];

/// Deterministic offline model: replays a fixed script regardless of topic.
/// Used when no endpoint is configured, so the app runs without a network.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTextModel;

#[async_trait]
impl TextModel for MockTextModel {
    async fn availability(&self) -> Availability {
        Availability::Available
    }

    async fn create_session(
        &self,
        _instructions: &str,
    ) -> Result<Box<dyn ModelSession>, ClientError> {
        Ok(Box::new(MockSession { turn: 0 }))
    }
}

struct MockSession {
    turn: usize,
}

#[async_trait]
impl ModelSession for MockSession {
    async fn respond(
        &mut self,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, ClientError> {
        let raw = CANNED_TURNS[self.turn % CANNED_TURNS.len()];
        self.turn += 1;
        Ok(raw.to_string())
    }
}
