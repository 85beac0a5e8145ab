use regex::Regex;
use std::sync::OnceLock;

fn quoted_payload_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Some bindings stringify a larger response object instead of handing
        // back the text field; the human-readable payload then sits behind a
        // `content: "` marker. Non-greedy up to the next quote.
        Regex::new(r#"(?s)content: "(.*?)""#).expect("valid payload regex")
    })
}

/// Extracts the human-readable payload from a raw model response.
///
/// If no recognizable `content: "..."` wrapper is present (or the wrapper is
/// truncated and never closes its quote), the whole input is the payload.
/// This heuristic is fragile against upstream format drift, which is exactly
/// why it lives here and nowhere else.
pub fn extract_payload(raw: &str) -> &str {
    match quoted_payload_re().captures(raw) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(raw),
        None => raw,
    }
}

/// Splits a raw model response into candidate words.
///
/// Total function: malformed input degrades to an empty or partial sequence,
/// never an error. Deduplication and length limits are the accumulator's job.
pub fn parse_words(raw: &str) -> Vec<String> {
    let payload = extract_payload(raw);

    let pieces: Vec<&str> = if payload.contains(',') {
        payload.split(',').collect()
    } else {
        payload.split_whitespace().collect()
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_when_present() {
        assert_eq!(
            parse_words("fruit, red, berry, sweet"),
            vec!["fruit", "red", "berry", "sweet"]
        );
    }

    #[test]
    fn splits_on_whitespace_without_commas() {
        assert_eq!(
            parse_words("fruit red\nberry\tsweet"),
            vec!["fruit", "red", "berry", "sweet"]
        );
    }

    #[test]
    fn trims_pieces_and_drops_empties() {
        assert_eq!(parse_words("  fruit ,, red ,  "), vec!["fruit", "red"]);
        assert_eq!(parse_words(""), Vec::<String>::new());
        assert_eq!(parse_words(" , , "), Vec::<String>::new());
    }

    #[test]
    fn extracts_quoted_payload_from_wrapped_response() {
        let raw = r#"Response(transcript: [...], content: "fruit, red, berry", raw: ...)"#;
        assert_eq!(extract_payload(raw), "fruit, red, berry");
        assert_eq!(parse_words(raw), vec!["fruit", "red", "berry"]);
    }

    #[test]
    fn unterminated_wrapper_falls_back_to_whole_input() {
        let raw = r#"content: "fruit, red"#;
        assert_eq!(extract_payload(raw), raw);
    }

    #[test]
    fn plain_text_passes_through_untouched() {
        assert_eq!(extract_payload("fruit, red"), "fruit, red");
    }

    #[test]
    fn never_panics_on_odd_input() {
        for raw in ["\"\"\"", "content: ", ",,,,", "\u{0}\u{1}", "🍓,🍓"] {
            let _ = parse_words(raw);
        }
    }
}
