//! Overlapping word-window chunking of normalized text.
//!
//! [`Chunker`] splits a document into fixed-size word windows whose starts
//! advance by `chunk_size - overlap`, so consecutive chunks share their
//! boundary words and the summarizer never loses context at a cut.  Chunks
//! borrow from the source text; nothing is copied until a chunk is turned
//! into owned text.

use crate::config::ConfigError;

// ---------------------------------------------------------------------------
// Chunker
// ---------------------------------------------------------------------------

/// Chunking parameters, validated at construction.
///
/// # Example
/// ```rust
/// use session_miner::preprocess::Chunker;
///
/// let chunker = Chunker::new(4, 1).unwrap();
/// let text = "one two three four five six seven";
/// let chunks: Vec<_> = chunker.chunks(text).collect();
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].words, ["one", "two", "three", "four"]);
/// assert_eq!(chunks[1].words, ["four", "five", "six", "seven"]);
/// assert_eq!(chunks[1].overlap_with_predecessor, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    chunk_size: usize,
    overlap: usize,
}

impl Chunker {
    pub const DEFAULT_CHUNK_SIZE: usize = 1000;
    pub const DEFAULT_OVERLAP: usize = 200;

    /// Create a chunker producing `chunk_size`-word windows that share
    /// `overlap` words with their predecessor.
    ///
    /// `overlap >= chunk_size` would stall the window (step of zero or
    /// less) and is rejected.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ConfigError> {
        if overlap >= chunk_size {
            return Err(ConfigError::OverlapTooLarge { chunk_size, overlap });
        }
        Ok(Self { chunk_size, overlap })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Lazily iterate over the chunks of `text`.  Each call starts a fresh
    /// pass, so the same chunker can walk the same document repeatedly.
    pub fn chunks<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            words: text.split_whitespace().collect(),
            chunk_size: self.chunk_size,
            overlap: self.overlap,
            next_start: 0,
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        // 1000/200 satisfies the overlap < chunk_size invariant
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            overlap: Self::DEFAULT_OVERLAP,
        }
    }
}

// ---------------------------------------------------------------------------
// Chunk
// ---------------------------------------------------------------------------

/// One word window borrowed from the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The window's words, in document order.
    pub words: Vec<&'a str>,
    /// How many leading words are shared with the previous chunk.  Zero for
    /// the first chunk; capped at the chunk's own length when a short final
    /// window sits entirely inside the overlap region.
    pub overlap_with_predecessor: usize,
}

impl<'a> Chunk<'a> {
    /// Number of words in the window.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` when the window holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The window as owned text, words joined by single spaces.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

// ---------------------------------------------------------------------------
// Chunks iterator
// ---------------------------------------------------------------------------

/// Lazy chunk iterator returned by [`Chunker::chunks`].
pub struct Chunks<'a> {
    words: Vec<&'a str>,
    chunk_size: usize,
    overlap: usize,
    next_start: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        if self.next_start >= self.words.len() {
            return None;
        }
        let start = self.next_start;
        let end = (start + self.chunk_size).min(self.words.len());

        let overlap_with_predecessor = if start == 0 {
            0
        } else {
            self.overlap.min(end - start)
        };

        // overlap < chunk_size guarantees the step is at least one word
        self.next_start = start + (self.chunk_size - self.overlap);

        Some(Chunk {
            words: self.words[start..end].to_vec(),
            overlap_with_predecessor,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(n: usize) -> String {
        (0..n)
            .map(|i| format!("w{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn rejects_overlap_equal_to_chunk_size() {
        assert!(matches!(
            Chunker::new(200, 200),
            Err(ConfigError::OverlapTooLarge {
                chunk_size: 200,
                overlap: 200,
            })
        ));
    }

    #[test]
    fn rejects_overlap_larger_than_chunk_size() {
        assert!(Chunker::new(100, 500).is_err());
        assert!(Chunker::new(0, 0).is_err());
    }

    #[test]
    fn chunks_overlap_by_the_configured_amount() {
        let chunker = Chunker::new(1000, 200).unwrap();
        let text = numbered_words(2500);
        let chunks: Vec<_> = chunker.chunks(&text).collect();

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].words[0], "w0");
        assert_eq!(chunks[1].words[0], "w800");
        assert_eq!(chunks[2].words[0], "w1600");
        assert_eq!(chunks[3].words[0], "w2400");

        let lens: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(lens, vec![1000, 1000, 900, 100]);

        let overlaps: Vec<usize> = chunks.iter().map(|c| c.overlap_with_predecessor).collect();
        assert_eq!(overlaps, vec![0, 200, 200, 100]);
    }

    #[test]
    fn interior_chunks_repeat_predecessor_tail() {
        let chunker = Chunker::new(5, 2).unwrap();
        let text = numbered_words(12);
        let chunks: Vec<_> = chunker.chunks(&text).collect();

        for pair in chunks.windows(2) {
            let shared = pair[1].overlap_with_predecessor;
            let tail = &pair[0].words[pair[0].len() - shared..];
            let head = &pair[1].words[..shared];
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn short_document_yields_one_chunk() {
        let chunker = Chunker::new(1000, 200).unwrap();
        let chunks: Vec<_> = chunker.chunks("just a few words").collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 4);
        assert!(!chunks[0].is_empty());
        assert_eq!(chunks[0].overlap_with_predecessor, 0);
    }

    #[test]
    fn empty_document_yields_no_chunks() {
        let chunker = Chunker::new(1000, 200).unwrap();
        assert_eq!(chunker.chunks("").count(), 0);
        assert_eq!(chunker.chunks("   \n  ").count(), 0);
    }

    #[test]
    fn iteration_is_restartable() {
        let chunker = Chunker::new(10, 3).unwrap();
        let text = numbered_words(50);
        let first: Vec<_> = chunker.chunks(&text).collect();
        let second: Vec<_> = chunker.chunks(&text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn final_chunk_inside_overlap_region_is_emitted() {
        // 1000 words, step 800: second chunk is the 200-word overlap tail
        let chunker = Chunker::new(1000, 200).unwrap();
        let text = numbered_words(1000);
        let chunks: Vec<_> = chunker.chunks(&text).collect();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].len(), 200);
        assert_eq!(chunks[1].overlap_with_predecessor, 200);
    }

    #[test]
    fn chunk_text_joins_with_single_spaces() {
        let chunker = Chunker::new(3, 1).unwrap();
        let chunks: Vec<_> = chunker.chunks("kick   snare\nbass").collect();
        assert_eq!(chunks[0].text(), "kick snare bass");
    }

    #[test]
    fn default_uses_standard_window() {
        let chunker = Chunker::default();
        assert_eq!(chunker.chunk_size(), 1000);
        assert_eq!(chunker.overlap(), 200);
    }
}
