//! Production-vocabulary matching for transcript lines.
//!
//! [`KeywordExtractor`] checks whether a line mentions any term from a
//! music-production vocabulary and, when it does, keeps the whole line.
//! This is classification rather than extraction: the surviving unit is
//! always the full line, never the matched word alone.

use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Built-in vocabulary
// ---------------------------------------------------------------------------

/// Production-domain terms that mark a line as interesting.  Compared as
/// whole words after case folding.
pub static KEY_TERMS: &[&str] = &[
    "drum",
    "beat",
    "synth",
    "bass",
    "kick",
    "snare",
    "sample",
    "sequence",
    "automation",
    "filter",
    "effect",
    "delay",
    "reverb",
    "midi",
    "tempo",
    "pattern",
    "mix",
    "eq",
    "compress",
    "melody",
    "pad",
    "chord",
];

// ---------------------------------------------------------------------------
// KeywordExtractor
// ---------------------------------------------------------------------------

/// Keeps transcript lines that mention production vocabulary.
///
/// Words are produced by whitespace splitting and compared exactly after
/// lowercasing, so `"drums"` or `"drum,"` do not match the term `"drum"`.
///
/// # Example
/// ```rust
/// use session_miner::transcript::KeywordExtractor;
///
/// let extractor = KeywordExtractor::new();
/// assert_eq!(
///     extractor.extract("big DRUM energy here"),
///     Some("big DRUM energy here"),
/// );
/// assert_eq!(extractor.extract("talking about lunch"), None);
/// ```
pub struct KeywordExtractor {
    terms: HashSet<String>,
}

impl KeywordExtractor {
    /// Create an extractor with the built-in production vocabulary.
    pub fn new() -> Self {
        Self::with_terms(KEY_TERMS.iter().map(|t| t.to_string()))
    }

    /// Create an extractor with a custom vocabulary.
    pub fn with_terms(terms: impl IntoIterator<Item = String>) -> Self {
        Self {
            terms: terms.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Return the whole line verbatim when any of its words matches the
    /// vocabulary, `None` otherwise.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut words = text.split_whitespace().map(str::to_lowercase);
        if words.any(|word| self.terms.contains(&word)) {
            Some(text)
        } else {
            None
        }
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
