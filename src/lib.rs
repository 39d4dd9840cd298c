//! session-miner — temporal and topical analysis of music-production
//! session transcripts.
//!
//! The input is a directory of timestamped transcripts, one `.txt` file per
//! producer session, one `H:M:S: text` line per speech segment.  Two
//! independent flows consume it:
//!
//! ```text
//! Analysis (in-memory, per line)
//!   parse_timestamp_line ─▶ NoiseFilter ─▶ KeywordExtractor
//!                                              │
//!                                              ▼
//!                                    TimeBucketAggregator
//!                                      ├─ temporal report (MM:SS, count, sample)
//!                                      ├─ top-N most active buckets
//!                                      └─ per-producer (bucket, text) sequences
//!
//! Preprocessing (per document)
//!   TextNormalizer ─▶ preprocessed/*.txt ─▶ Chunker ─▶ Summarizer (remote, optional)
//! ```
//!
//! The analysis flow answers "when was the session busy and with what"; the
//! preprocessing flow prepares chunked text for a remote summarizer behind
//! the [`summarize::Summarizer`] trait.  Neither flow needs the other, and
//! only the summarizer ever touches the network.

pub mod analysis;
pub mod config;
pub mod pipeline;
pub mod preprocess;
pub mod summarize;
pub mod transcript;
