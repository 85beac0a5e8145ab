use serde::{Deserialize, Serialize};

pub const MIN_TURNS: u32 = 3;
pub const MAX_TURNS: u32 = 10;
pub const DEFAULT_TURNS: u32 = 5;

// Word generation wants variety over precision; a fixed high temperature keeps
// repeated "more words" turns from echoing the same output.
pub const WORD_GENERATION_TEMPERATURE: f32 = 1.5;

// Pacing defaults: 50ms between accepted words (the reveal effect observers
// animate against) and 500ms between turns so we don't hammer the model.
pub const WORD_REVEAL_DELAY_MS: u64 = 50;
pub const INTER_TURN_DELAY_MS: u64 = 500;

pub fn clamp_max_turns(value: u32) -> u32 {
    value.clamp(MIN_TURNS, MAX_TURNS)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub max_turns: u32,
    pub temperature: f32,
    pub word_reveal_delay_ms: u64,
    pub inter_turn_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_TURNS,
            temperature: WORD_GENERATION_TEMPERATURE,
            word_reveal_delay_ms: WORD_REVEAL_DELAY_MS,
            inter_turn_delay_ms: INTER_TURN_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_turns_into_range() {
        assert_eq!(clamp_max_turns(0), MIN_TURNS);
        assert_eq!(clamp_max_turns(3), 3);
        assert_eq!(clamp_max_turns(7), 7);
        assert_eq!(clamp_max_turns(10), 10);
        assert_eq!(clamp_max_turns(99), MAX_TURNS);
    }

    #[test]
    fn default_config_matches_constants() {
        let cfg = GenerationConfig::default();
        assert_eq!(cfg.max_turns, DEFAULT_TURNS);
        assert_eq!(cfg.temperature, WORD_GENERATION_TEMPERATURE);
        assert_eq!(cfg.word_reveal_delay_ms, 50);
        assert_eq!(cfg.inter_turn_delay_ms, 500);
    }
}
