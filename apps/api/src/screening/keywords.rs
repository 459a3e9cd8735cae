//! Text normalization and keyword extraction.

use std::collections::HashSet;

use crate::lexicon::Lexicon;

/// Lower-cases raw document text. No other transformation; idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Extracts the keyword set of a text: tokens that are entirely alphabetic
/// and not stopwords, lower-cased and deduplicated.
///
/// Deterministic for a fixed input and lexicon: no randomness, no ambient
/// state. Empty input, or input of only stopwords/punctuation/numbers,
/// yields the empty set.
pub fn extract_keywords(text: &str, lexicon: &Lexicon) -> HashSet<String> {
    let normalized = normalize(text);
    let mut keywords = HashSet::new();
    for token in lexicon.tokenize(&normalized) {
        if token.chars().all(char::is_alphabetic) && !lexicon.is_stopword(token) {
            keywords.insert(token.to_string());
        }
    }
    keywords
}

/// Joins a keyword set into the space-separated pseudo-document the scorer
/// consumes. Sorted so the output is identical across runs regardless of
/// hash order.
pub fn join_keywords(keywords: &HashSet<String>) -> String {
    let mut sorted: Vec<&str> = keywords.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(" ")
}
