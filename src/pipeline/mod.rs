//! Pipeline module for session-miner.
//!
//! This module wires the per-line analysis stages and the whole-document
//! preprocessing stages into directory-level runs.
//!
//! # Architecture
//!
//! ```text
//! transcripts/*.txt
//!        │
//!        ├─ TranscriptAnalyzer::process_directory
//!        │     │
//!        │     ├─ parse_timestamp_line   (malformed → skip)
//!        │     ├─ NoiseFilter            (filler / short → skip)
//!        │     ├─ KeywordExtractor       (no vocabulary → skip)
//!        │     └─ TimeBucketAggregator   (record per producer + bucket)
//!        │
//!        └─ preprocess_directory
//!              │
//!              ├─ TextNormalizer::normalize  (5-step cleanup)
//!              └─ write preprocessed/<same name>
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use session_miner::config::AppConfig;
//! use session_miner::pipeline::{preprocess_directory, TranscriptAnalyzer};
//! use session_miner::preprocess::TextNormalizer;
//!
//! let config = AppConfig::default();
//!
//! let mut analyzer = TranscriptAnalyzer::from_config(&config).unwrap();
//! analyzer
//!     .process_directory(&config.paths.transcripts_dir)
//!     .unwrap();
//! print!("{}", analyzer.aggregator().temporal_report().render());
//!
//! let normalizer = TextNormalizer::new();
//! preprocess_directory(
//!     &config.paths.transcripts_dir,
//!     &config.paths.preprocessed_dir,
//!     &normalizer,
//! )
//! .unwrap();
//! ```

pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{
    preprocess_directory, PipelineError, PreprocessSummary, RunSummary, TranscriptAnalyzer,
};
