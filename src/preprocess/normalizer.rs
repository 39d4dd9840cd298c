//! Whole-document text normalization.
//!
//! [`TextNormalizer`] prepares raw transcripts for the summarizer in five
//! ordered steps: duplicate-line removal, case folding, timestamp stripping,
//! special-character removal, stopword removal.  The order matters — dedup
//! keys are computed on the raw lines, and stopword matching only ever sees
//! lowercase alphanumeric words because the earlier steps ran first.
//!
//! Each step is also exposed on its own for callers that want partial
//! cleanup.

use std::collections::HashSet;

use regex::Regex;

// ---------------------------------------------------------------------------
// Patterns and word tables
// ---------------------------------------------------------------------------

/// Calendar-timestamp prefix written by the transcription stage:
/// `YYYY-MM-DD HH:MM:SS: `.  Every occurrence is removed, wherever it sits
/// in the line.
const TIMESTAMP_PATTERN: &str = r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}: ";

/// Standard English stopword list (the NLTK set).
///
/// Contractions appear in their apostrophe form; after special-character
/// removal `"don't"` has already become `"dont"`, which is not in this list
/// and therefore survives.  That asymmetry is part of the pipeline contract.
static STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it",
    "it's", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "that'll", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and",
    "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in",
    "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
    "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

// ---------------------------------------------------------------------------
// TextNormalizer
// ---------------------------------------------------------------------------

/// Runs the five-step normalization pipeline over whole documents.
///
/// # Example
/// ```rust
/// use session_miner::preprocess::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// let cleaned = normalizer.normalize("2023-01-01 10:00:00: Adding the KICK drum!");
/// assert_eq!(cleaned, "adding kick drum");
/// ```
pub struct TextNormalizer {
    timestamp_re: Regex,
    stopwords: HashSet<&'static str>,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            // Fixed pattern, known to parse
            timestamp_re: Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern"),
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Run all five steps in order and return the cleaned document.
    ///
    /// The result is a single line of lowercase alphanumeric words joined by
    /// single spaces.  Running it twice changes nothing.
    pub fn normalize(&self, text: &str) -> String {
        let text = self.remove_duplicate_lines(text);
        let text = text.to_lowercase();
        let text = self.remove_timestamps(&text);
        let text = remove_special_characters(&text);
        self.remove_stopwords(&text)
    }

    /// Step 1 — drop lines whose trimmed, timestamp-stripped form was seen
    /// before.  The first-encountered physical line survives unchanged, so
    /// a timestamped line and its bare duplicate collapse into whichever
    /// came first.
    pub fn remove_duplicate_lines(&self, text: &str) -> String {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for line in text.split('\n') {
            let key = self.remove_timestamps(line.trim());
            if seen.insert(key) {
                unique.push(line);
            }
        }
        unique.join("\n")
    }

    /// Step 3 — delete every calendar-timestamp occurrence.
    pub fn remove_timestamps(&self, text: &str) -> String {
        self.timestamp_re.replace_all(text, "").into_owned()
    }

    /// Step 5 — drop stopwords and rejoin the survivors with single spaces.
    /// Words are compared in lowercase.
    pub fn remove_stopwords(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.stopwords.contains(word.to_lowercase().as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Step 4 — keep only ASCII letters, digits and whitespace.
pub fn remove_special_characters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
