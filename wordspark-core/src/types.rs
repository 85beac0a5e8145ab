use serde::{Deserialize, Serialize};

/// One turn's worth of request parameters. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub turn_index: u32,
    pub max_turns: u32,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, turn_index: u32, max_turns: u32) -> Self {
        Self {
            topic: topic.into(),
            turn_index,
            max_turns,
        }
    }

    pub fn is_first_turn(&self) -> bool {
        self.turn_index == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_turn_is_index_zero() {
        assert!(GenerationRequest::new("strawberry", 0, 5).is_first_turn());
        assert!(!GenerationRequest::new("strawberry", 1, 5).is_first_turn());
    }
}
