use serde::Serialize;
use wordspark_core::error::GenerationErrorKind;

/// The controller's published snapshot.
///
/// Immutable to observers. `words` is append-only for the duration of a run;
/// a reset to empty (topic change or clear) is the only valid shrink event.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GenerationState {
    pub words: Vec<String>,
    pub is_generating: bool,
    pub current_topic: String,
    pub last_error: Option<GenerationErrorKind>,
    pub model_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle_and_empty() {
        let state = GenerationState::default();
        assert!(state.words.is_empty());
        assert!(!state.is_generating);
        assert!(state.current_topic.is_empty());
        assert!(state.last_error.is_none());
        assert!(!state.model_available);
    }
}
