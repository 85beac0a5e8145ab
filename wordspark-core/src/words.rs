use std::collections::HashSet;

/// Upper bound on an accepted word's length, in characters.
pub const MAX_WORD_CHARS: usize = 100;

/// The working ordered set of accepted words for the current topic.
///
/// Append-only within a topic's lifetime; `reset` is the only shrink event.
/// Uniqueness is case-insensitive and the first accepted spelling wins.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the candidate iff it is non-empty, at most [`MAX_WORD_CHARS`]
    /// characters, has no embedded whitespace (hyphens are fine), and no
    /// existing entry matches it case-insensitively.
    pub fn try_add(&mut self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate.is_empty() || candidate.chars().count() > MAX_WORD_CHARS {
            return false;
        }
        if candidate.chars().any(char::is_whitespace) {
            return false;
        }

        let key = candidate.to_lowercase();
        if !self.seen.insert(key) {
            return false;
        }

        self.entries.push(candidate.to_string());
        true
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.seen.clear();
    }

    pub fn words(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
