//! Tracked-word detection over message text.

use std::collections::BTreeSet;

/// Count tokens of `text` that contain a tracked word.
///
/// The text is lower-cased, every run of characters outside ASCII letters/digits and Cyrillic
/// letters is collapsed into a single space, and the result is split into tokens.  A token
/// counts once if any tracked word occurs inside it as a substring; first match wins, so a
/// token never contributes more than one to the total even when several words match it.
///
/// Substring rather than whole-word matching is deliberate: it catches concatenations and
/// inflected Russian forms at the price of false positives on innocent words that contain a
/// tracked substring.
pub fn count_matches(text: &str, words: &BTreeSet<String>) -> usize {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| words.iter().any(|word| token.contains(word.as_str())))
        .count()
}

// `ё` sits outside the contiguous а-я block and needs its own case.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('а'..='я').contains(&c) || c == 'ё'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn counts_across_both_alphabets() {
        let words = lexicon(&["fuck", "блять"]);
        assert_eq!(count_matches("what the fuck, блять!!", &words), 2);
    }

    #[test]
    fn substring_matches_inside_longer_token() {
        let words = lexicon(&["хер"]);
        assert_eq!(count_matches("херня", &words), 1);
    }

    #[test]
    fn token_counts_at_most_once() {
        // Two tracked words inside one token, and one word repeated in it
        let words = lexicon(&["fuck", "shit"]);
        assert_eq!(count_matches("fuckshitfuck", &words), 1);
    }

    #[test]
    fn bounded_by_token_count() {
        let words = lexicon(&["a", "b", "c"]);
        let text = "ab bc ca";
        assert!(count_matches(text, &words) <= text.split_whitespace().count());
    }

    #[test]
    fn case_insensitive() {
        let words = lexicon(&["damn", "сука"]);
        let text = "Damn, СУКА";
        assert_eq!(count_matches(text, &words), 2);
        assert_eq!(
            count_matches(&text.to_uppercase(), &words),
            count_matches(&text.to_lowercase(), &words),
        );
    }

    #[test]
    fn punctuation_and_emoji_are_separators() {
        let words = lexicon(&["shit"]);
        assert_eq!(count_matches("shit...shit\u{1F600}shit", &words), 3);
    }

    #[test]
    fn no_match_means_zero() {
        let words = lexicon(&["fuck"]);
        assert_eq!(count_matches("perfectly polite message", &words), 0);
    }

    #[test]
    fn degenerate_inputs() {
        let words = lexicon(&["fuck"]);
        assert_eq!(count_matches("", &words), 0);
        assert_eq!(count_matches("?!... !!", &words), 0);
        assert_eq!(count_matches("any text at all", &lexicon(&[])), 0);
    }
}
