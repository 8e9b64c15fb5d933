//! Legal-description splitting across fixed-width template fields.
//!
//! The contract templates reserve three physical lines for the legal
//! description, each with its own character budget. One free-form string
//! is packed greedily, word by word, into those bins. Words past the
//! total capacity are dropped; a single word longer than a bin's budget
//! is placed whole and may overrun it. Both quirks are relied upon by
//! existing templates and are covered by tests below - do not "fix" them
//! without coordinating a template change.

use crate::config::LEGAL_DESCRIPTION_LIMITS;

/// Split `text` on word boundaries into one segment per entry of `limits`.
///
/// Greedy packing: a word is appended to the current segment when the
/// segment, the word and a joining space fit the segment's limit;
/// otherwise the segment is flushed (trimmed) and the word seeds the next
/// one. Once every bin has been flushed, remaining words are silently
/// dropped. Trailing bins are padded with empty strings, so the result
/// always has exactly `limits.len()` entries.
///
/// Total over all inputs: degenerate input (empty text, zero limits)
/// yields empty segments, never an error.
#[must_use]
pub fn split_legal_description(text: &str, limits: &[usize]) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut bin = 0;

    if limits.is_empty() {
        return parts;
    }

    for word in text.split_whitespace() {
        if current.chars().count() + word.chars().count() + 1 <= limits[bin] {
            current.push_str(word);
            current.push(' ');
        } else {
            parts.push(current.trim().to_string());
            current = format!("{word} ");
            bin += 1;

            if bin >= limits.len() {
                break;
            }
        }
    }

    if bin < limits.len() {
        parts.push(current.trim().to_string());
    }

    while parts.len() < limits.len() {
        parts.push(String::new());
    }

    parts.truncate(limits.len());
    parts
}

/// Split with the template's default segment limits.
#[must_use]
pub fn split_legal_description_default(text: &str) -> Vec<String> {
    split_legal_description(text, &LEGAL_DESCRIPTION_LIMITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_yields_empty_segments() {
        assert_eq!(split_legal_description("", &[65, 91, 91]), vec!["", "", ""]);
        assert_eq!(
            split_legal_description("   \t  ", &[65, 91, 91]),
            vec!["", "", ""]
        );
    }

    #[test]
    fn test_result_length_matches_limits() {
        assert_eq!(split_legal_description("one two", &[10]).len(), 1);
        assert_eq!(split_legal_description("one two", &[10, 10]).len(), 2);
        assert_eq!(split_legal_description("one two", &[3, 3, 3, 3]).len(), 4);
    }

    #[test]
    fn test_short_input_fills_first_segment_only() {
        assert_eq!(
            split_legal_description("Lot 4 Block 2", &[65, 91, 91]),
            vec!["Lot 4 Block 2", "", ""]
        );
    }

    #[test]
    fn test_greedy_flow_across_segments() {
        let parts = split_legal_description(
            "Lot 4 Block 2 of the Sunnydale Subdivision according to the plat thereof",
            &[10, 20, 20],
        );
        assert_eq!(parts, vec!["Lot 4", "Block 2 of the", "Sunnydale"]);
    }

    #[test]
    fn test_segments_are_trimmed() {
        let parts = split_legal_description("alpha beta gamma", &[11, 11, 11]);
        assert_eq!(parts, vec!["alpha beta", "gamma", ""]);
        for part in &parts {
            assert_eq!(part, part.trim());
        }
    }

    #[test]
    fn test_words_past_capacity_are_dropped() {
        // Three overflows exhaust the bins; everything after is lost,
        // never reordered.
        let parts = split_legal_description("aaa bbb ccc ddd eee", &[4, 4, 4]);
        assert_eq!(parts, vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn test_non_empty_segments_reproduce_a_prefix() {
        let text = "Lot 7 of Tract 1492 in the City of Avalon per map recorded in Book 52";
        let parts = split_legal_description(text, &[12, 18, 14]);
        let joined = parts
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        assert!(text.starts_with(&joined));
    }

    #[test]
    fn test_overlong_word_is_never_split() {
        // A word that exceeds the bin it is checked against flushes that
        // bin and lands whole in the next one, overrunning its nominal
        // limit. Accepted template behavior.
        let word = "Pneumonoultramicroscopicsilicovolcanoconiosis";
        let parts = split_legal_description(word, &[10, 20, 20]);
        assert_eq!(parts, vec!["", word, ""]);
        assert!(parts[1].len() > 20);
    }

    #[test]
    fn test_overlong_word_past_last_bin_is_dropped() {
        let parts = split_legal_description("aaa bbb ccc ddddddddddddd", &[4, 4, 4]);
        assert_eq!(parts, vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn test_default_limits() {
        let parts = split_legal_description_default("Lot 4 Block 2");
        assert_eq!(parts, vec!["Lot 4 Block 2", "", ""]);
    }

    #[test]
    fn test_character_counting_not_bytes() {
        // Two-byte characters still count as one position each.
        let parts = split_legal_description("áéíóú words", &[6, 10, 10]);
        assert_eq!(parts, vec!["áéíóú", "words", ""]);
    }

    #[test]
    fn test_zero_width_limit_entry() {
        // Nothing fits a zero-width bin; packing stays well-defined.
        let parts = split_legal_description("a b", &[0, 4, 4]);
        assert_eq!(parts, vec!["", "a b", ""]);
    }
}
