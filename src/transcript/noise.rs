//! Noise classification for transcript lines.
//!
//! Spoken narration is dominated by short interjections ("yeah", "okay",
//! crowd markers) that carry no production content.  [`NoiseFilter`] drops
//! them before the keyword test runs: a line is noise when it equals a known
//! filler phrase, is shorter than five characters, or has fewer than three
//! words.

use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Built-in filler phrases
// ---------------------------------------------------------------------------

/// Filler phrases skipped regardless of length.  Matched case-insensitively
/// against the whole line.
pub static FILLER_PHRASES: &[&str] = &[
    "let's go",
    "wow",
    "applause",
    "yeah",
    "okay",
    "cool",
    "all right",
    "mm-hmm",
    "uh-huh",
    "um",
    "uh",
];

/// Lines shorter than this many characters are noise.
const MIN_TEXT_LEN: usize = 5;

/// Lines with fewer space characters than this are noise (at least three
/// words are required to describe an action).
const MIN_SPACES: usize = 2;

// ---------------------------------------------------------------------------
// NoiseFilter
// ---------------------------------------------------------------------------

/// Classifies transcript lines as noise or content.
///
/// # Example
/// ```rust
/// use session_miner::transcript::NoiseFilter;
///
/// let filter = NoiseFilter::new();
/// assert!(filter.is_noise("Yeah"));
/// assert!(filter.is_noise("kick drum"));
/// assert!(!filter.is_noise("adding a kick drum"));
/// ```
pub struct NoiseFilter {
    phrases: HashSet<String>,
}

impl NoiseFilter {
    /// Create a filter with the built-in filler phrases.
    pub fn new() -> Self {
        Self::with_phrases(FILLER_PHRASES.iter().map(|p| p.to_string()))
    }

    /// Create a filter with a custom filler phrase set.
    pub fn with_phrases(phrases: impl IntoIterator<Item = String>) -> Self {
        Self {
            phrases: phrases.into_iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Returns `true` when `text` carries no analyzable content.
    ///
    /// Noise means any of: the whole line (lowercased) is a filler phrase,
    /// the line is under five characters, or the line has fewer than two
    /// space characters.
    pub fn is_noise(&self, text: &str) -> bool {
        self.phrases.contains(&text.to_lowercase())
            || text.chars().count() < MIN_TEXT_LEN
            || text.matches(' ').count() < MIN_SPACES
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
