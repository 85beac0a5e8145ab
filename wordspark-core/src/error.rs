use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure modes of the text-model capability, as seen by the controller.
///
/// The capability is a black box; these are the only distinctions the run loop
/// acts on. Anything the provider can't map to a specific variant lands in
/// `Other` and is treated as a generic abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("model unavailable: {reason}")]
    Unavailable { reason: String },

    // The session's context budget is spent. Recoverable: drop the session,
    // start a fresh one, keep the run going.
    #[error("session context window exhausted")]
    ContextExhausted,

    #[error("input language is not supported")]
    UnsupportedInput,

    #[error("model request failed: {0}")]
    Other(String),
}

/// The user-facing error kind published in `GenerationState`.
///
/// `ContextExhausted` never appears here: it is recovered inside the run and
/// stays invisible to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationErrorKind {
    UnsupportedInput,
    Generic,
}

impl GenerationErrorKind {
    pub fn user_message(self) -> &'static str {
        match self {
            Self::UnsupportedInput => {
                "That language isn't supported yet. Try a word or phrase in a supported language."
            }
            Self::Generic => {
                "Something went wrong while generating words. Try again, or try a different word or fewer generation turns."
            }
        }
    }
}

impl From<&ClientError> for GenerationErrorKind {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::UnsupportedInput => Self::UnsupportedInput,
            _ => Self::Generic,
        }
    }
}
