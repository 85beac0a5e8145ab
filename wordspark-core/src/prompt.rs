use crate::types::GenerationRequest;

/// Fixed system instructions the session is seeded with once per topic.
pub const SYSTEM_INSTRUCTIONS: &str = "You are a helpful assistant that generates related words to a word or phrase provided to you.\n\
When given a word, generate as many related synonyms or associated words as you can. Aim to generate at least 25 related words. It's ok if you can't think of many words, but please try your best.\n\
Return only the words, separated by commas. Do not include explanations or additional text.";

/// Builds the per-turn prompt.
///
/// The phrasing shift on later turns matters: the model conditions on the
/// session history, and repeating the identical first-turn prompt tends to
/// repeat the first turn's output verbatim.
pub fn build_prompt(request: &GenerationRequest) -> String {
    if request.is_first_turn() {
        format!("Generate related words for: {}", request.topic)
    } else {
        format!("Generate more related words for: {}", request.topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_turn_asks_for_related_words() {
        let req = GenerationRequest::new("strawberry", 0, 5);
        assert_eq!(build_prompt(&req), "Generate related words for: strawberry");
    }

    #[test]
    fn later_turns_ask_for_more() {
        for turn in 1..5 {
            let req = GenerationRequest::new("strawberry", turn, 5);
            assert_eq!(
                build_prompt(&req),
                "Generate more related words for: strawberry"
            );
        }
    }

    #[test]
    fn instructions_demand_comma_separated_words() {
        assert!(SYSTEM_INSTRUCTIONS.contains("separated by commas"));
    }
}
