//! Lexicon — the linguistic resource backing keyword extraction: token
//! boundaries plus the fixed English stopword list.
//!
//! Loaded once at startup and carried in `AppState`; extractor calls receive
//! it as an explicit argument so tests can run against a stub list.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use unicode_segmentation::UnicodeSegmentation;

/// Built-in English stopword list, compiled into the binary.
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Tokenizer and stopword resource for one fixed language (English).
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Loads a stopword override file: one word per line, `#` lines and
    /// blanks ignored, entries lower-cased. An unreadable file is an error;
    /// the service must not start with a partial lexicon.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file '{}'", path.display()))?;
        let stopwords: HashSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_lowercase())
            .collect();
        Ok(Self { stopwords })
    }

    /// Splits text into linguistic tokens on Unicode word boundaries.
    /// Punctuation never appears in the output; numbers do and are filtered
    /// downstream by the extractor's alphabetic check.
    pub fn tokenize<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.unicode_words()
    }

    /// Membership in the fixed stopword list. Callers pass lower-cased tokens.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}
