use thiserror::Error;

/// Topics are a word or short phrase: at most this many whitespace-separated
/// words. Enforced by the front-end before a run starts, not by the
/// controller.
pub const MAX_TOPIC_WORDS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("topic is empty")]
    Empty,
    #[error("topic has more than {MAX_TOPIC_WORDS} words")]
    TooManyWords,
}

pub fn validate_topic(input: &str) -> Result<String, TopicError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TopicError::Empty);
    }
    if trimmed.split_whitespace().count() > MAX_TOPIC_WORDS {
        return Err(TopicError::TooManyWords);
    }
    Ok(trimmed.to_string())
}
