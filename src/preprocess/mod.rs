//! Document preparation for the remote summarizer.
//!
//! This module provides:
//! * [`TextNormalizer`] — five-step whole-document cleanup (dedup,
//!   lowercase, timestamp strip, special-character strip, stopword strip).
//! * [`Chunker`] / [`Chunk`] — overlapping word windows over the cleaned
//!   text.
//!
//! # Quick start
//!
//! ```rust
//! use session_miner::preprocess::{Chunker, TextNormalizer};
//!
//! let normalizer = TextNormalizer::new();
//! let cleaned = normalizer.normalize("The KICK, the SNARE, and the BASS!");
//! assert_eq!(cleaned, "kick snare bass");
//!
//! let chunker = Chunker::new(2, 1).unwrap();
//! let first = chunker.chunks(&cleaned).next().unwrap();
//! assert_eq!(first.text(), "kick snare");
//! ```

pub mod chunker;
pub mod normalizer;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use chunker::{Chunk, Chunker, Chunks};
pub use normalizer::{remove_special_characters, TextNormalizer};
