//! Remote summarization boundary for session-miner.
//!
//! This module provides:
//! * [`Summarizer`] — async trait implemented by all summarizer backends.
//! * [`ApiSummarizer`] — OpenAI-compatible REST API summarizer.
//! * [`EXCERPT_INSTRUCTIONS`] — built-in per-chunk instruction block.
//! * [`RemoteServiceError`] — error variants for remote calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use session_miner::config::AppConfig;
//! use session_miner::summarize::{ApiSummarizer, Summarizer, EXCERPT_INSTRUCTIONS};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let summarizer = ApiSummarizer::from_config(&config.summarizer);
//!
//!     let chunk = "kick snare bass automation filter sweep";
//!     let summary = summarizer
//!         .summarize(chunk, EXCERPT_INSTRUCTIONS)
//!         .await
//!         .unwrap();
//!     println!("{}", summary);
//! }
//! ```

pub mod instructions;
pub mod remote;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use instructions::EXCERPT_INSTRUCTIONS;
pub use remote::{ApiSummarizer, RemoteServiceError, Summarizer};
