use std::collections::HashSet;

/// Words shorter than this are not indexed
const MIN_WORD_LENGTH: usize = 2;

/// Split a query fragment into lowercase keywords on whitespace
pub fn split_keywords(text: &str) -> Vec<String> {
    text.split_whitespace().map(|w| w.to_lowercase()).collect()
}

/// Drop every character that is neither alphanumeric nor whitespace.
///
/// Used when a colon in a query turns out not to be a book scope, so that
/// `"love: god"` searches for `love` and `god`.
pub fn strip_non_alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Normalize verse text for indexing.
///
/// Lowercases, turns punctuation into spaces (word characters, whitespace
/// and hyphens survive), collapses runs of whitespace and trims.
pub fn normalize_text(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Distinct indexable words of a verse, in order of first appearance
pub fn extract_words(text: &str) -> Vec<String> {
    let normalized = normalize_text(text);
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for word in normalized.split(' ') {
        if word.chars().count() < MIN_WORD_LENGTH {
            continue;
        }
        if seen.insert(word) {
            words.push(word.to_string());
        }
    }

    words
}
