//! Per-line transcript ingestion for session-miner.
//!
//! This module provides:
//! * [`parse_timestamp_line`] / [`TranscriptLine`] — `H:M:S: text` parsing.
//! * [`NoiseFilter`] — drops filler phrases and too-short lines.
//! * [`KeywordExtractor`] — keeps lines mentioning production vocabulary.
//! * [`FILLER_PHRASES`] / [`KEY_TERMS`] — built-in phrase and term tables.
//!
//! # Quick start
//!
//! ```rust
//! use session_miner::transcript::{parse_timestamp_line, KeywordExtractor, NoiseFilter};
//!
//! let noise = NoiseFilter::new();
//! let keywords = KeywordExtractor::new();
//!
//! let line = parse_timestamp_line("0:01:05: bringing in the snare now").unwrap();
//! assert!(!noise.is_noise(&line.text));
//! assert_eq!(keywords.extract(&line.text), Some(line.text.as_str()));
//! ```

pub mod keywords;
pub mod noise;
pub mod parser;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use keywords::{KeywordExtractor, KEY_TERMS};
pub use noise::{NoiseFilter, FILLER_PHRASES};
pub use parser::{parse_timestamp_line, TranscriptLine};
