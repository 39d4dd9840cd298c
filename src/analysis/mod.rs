//! Temporal analysis of matched transcript lines.
//!
//! This module provides:
//! * [`TimeBucketAggregator`] — fixed-width time buckets plus per-producer
//!   action sequences.
//! * [`TemporalReport`] / [`ReportRow`] — immutable report snapshots with
//!   top-N queries and text rendering.
//! * [`format_clock`] — `MM:SS` formatting of second offsets.
//!
//! # Quick start
//!
//! ```rust
//! use session_miner::analysis::TimeBucketAggregator;
//!
//! let mut agg = TimeBucketAggregator::new(30).unwrap();
//! agg.record("alice", 5, "adding a kick drum");
//! agg.record("alice", 12, "layering the snare");
//! agg.record("alice", 61, "bass automation pass");
//!
//! let report = agg.temporal_report();
//! let busiest = report.top_n(1);
//! assert_eq!(busiest[0].bucket_start, 0);
//! assert_eq!(busiest[0].count, 2);
//! ```

pub mod aggregator;
pub mod report;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use aggregator::TimeBucketAggregator;
pub use report::{format_clock, ReportRow, TemporalReport};
