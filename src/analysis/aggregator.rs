//! Time-bucketed aggregation of matched transcript lines.
//!
//! [`TimeBucketAggregator`] accumulates every line that survived the noise
//! and keyword filters into fixed-width time windows, flooring each offset
//! to its bucket start.  It also keeps a per-producer sequence of
//! `(bucket, text)` pairs in encounter order, so one run answers both
//! "when was the session busy" and "what did each producer do".

use std::collections::BTreeMap;

use crate::analysis::report::{
    format_clock, ReportRow, TemporalReport, SAMPLE_LIMIT, SAMPLE_SEPARATOR,
};
use crate::config::ConfigError;

// ---------------------------------------------------------------------------
// TimeBucketAggregator
// ---------------------------------------------------------------------------

/// Accumulates matched lines into fixed-width time buckets.
///
/// Buckets are keyed by their start offset (a multiple of the bucket width)
/// and only exist once a line lands in them; silent stretches produce no
/// entries.  The ordered map keeps the temporal report chronological without
/// a sort step.
///
/// # Example
/// ```rust
/// use session_miner::analysis::TimeBucketAggregator;
///
/// let mut agg = TimeBucketAggregator::new(30).unwrap();
/// agg.record("alice", 5, "adding a kick drum");
/// agg.record("alice", 35, "now the snare pattern");
/// agg.record("alice", 65, "rolling the bass in");
///
/// assert_eq!(agg.bucket_for(35), 30);
/// assert_eq!(agg.producer_patterns("alice").len(), 3);
/// ```
pub struct TimeBucketAggregator {
    bucket_width: u32,
    /// Bucket start → matched lines, in recording order.
    buckets: BTreeMap<u32, Vec<String>>,
    /// Producer → `(bucket, text)` pairs, in encounter order.
    producers: BTreeMap<String, Vec<(u32, String)>>,
}

impl TimeBucketAggregator {
    // -- Construction --------------------------------------------------------

    /// Create an aggregator with the given bucket width in seconds.
    ///
    /// A zero width cannot floor offsets and is rejected up front.
    pub fn new(bucket_width: u32) -> Result<Self, ConfigError> {
        if bucket_width == 0 {
            return Err(ConfigError::ZeroBucketWidth);
        }
        Ok(Self {
            bucket_width,
            buckets: BTreeMap::new(),
            producers: BTreeMap::new(),
        })
    }

    // -- Mutation ------------------------------------------------------------

    /// Record one matched line for `producer` at `offset_seconds`.
    pub fn record(&mut self, producer: &str, offset_seconds: u32, text: &str) {
        let bucket = self.bucket_for(offset_seconds);
        self.buckets
            .entry(bucket)
            .or_default()
            .push(text.to_string());
        self.producers
            .entry(producer.to_string())
            .or_default()
            .push((bucket, text.to_string()));
    }

    // -- Queries -------------------------------------------------------------

    /// Floor `offset_seconds` to the start of its bucket.
    pub fn bucket_for(&self, offset_seconds: u32) -> u32 {
        (offset_seconds / self.bucket_width) * self.bucket_width
    }

    /// The configured bucket width in seconds.
    pub fn bucket_width(&self) -> u32 {
        self.bucket_width
    }

    /// Build the chronological activity report for everything recorded so
    /// far.  Rows sample at most the first three lines of each bucket.
    pub fn temporal_report(&self) -> TemporalReport {
        let rows = self
            .buckets
            .iter()
            .map(|(&bucket, texts)| ReportRow {
                bucket_start: bucket,
                clock: format_clock(bucket),
                count: texts.len(),
                sample: texts
                    .iter()
                    .take(SAMPLE_LIMIT)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(SAMPLE_SEPARATOR),
            })
            .collect();
        TemporalReport::new(rows)
    }

    /// `(bucket, text)` pairs recorded for `producer`, in encounter order.
    /// Unknown producers yield an empty slice.
    pub fn producer_patterns(&self, producer: &str) -> &[(u32, String)] {
        self.producers
            .get(producer)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All producer names seen so far, in sorted order.
    pub fn producers(&self) -> impl Iterator<Item = &str> {
        self.producers.keys().map(String::as_str)
    }

    /// Number of distinct producers seen so far.
    pub fn producer_count(&self) -> usize {
        self.producers.len()
    }

    /// `true` when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bucket_width_is_rejected() {
        assert!(matches!(
            TimeBucketAggregator::new(0),
            Err(ConfigError::ZeroBucketWidth)
        ));
    }

    #[test]
    fn reports_the_configured_width() {
        let agg = TimeBucketAggregator::new(45).unwrap();
        assert_eq!(agg.bucket_width(), 45);
    }

    #[test]
    fn floors_offsets_to_bucket_start() {
        let agg = TimeBucketAggregator::new(30).unwrap();
        assert_eq!(agg.bucket_for(0), 0);
        assert_eq!(agg.bucket_for(5), 0);
        assert_eq!(agg.bucket_for(29), 0);
        assert_eq!(agg.bucket_for(30), 30);
        assert_eq!(agg.bucket_for(65), 60);
    }

    #[test]
    fn bucket_assignment_is_idempotent() {
        let agg = TimeBucketAggregator::new(45).unwrap();
        for offset in [0, 7, 44, 45, 46, 90, 1234] {
            let bucket = agg.bucket_for(offset);
            assert_eq!(agg.bucket_for(bucket), bucket);
            assert_eq!(bucket % 45, 0);
        }
    }

    #[test]
    fn consecutive_offsets_land_in_consecutive_buckets() {
        let mut agg = TimeBucketAggregator::new(30).unwrap();
        agg.record("p", 5, "adding a kick drum");
        agg.record("p", 35, "now the snare pattern");
        agg.record("p", 65, "rolling the bass in");

        let report = agg.temporal_report();
        let starts: Vec<u32> = report.rows().iter().map(|r| r.bucket_start).collect();
        assert_eq!(starts, vec![0, 30, 60]);
        assert!(report.rows().iter().all(|r| r.count == 1));
    }

    #[test]
    fn rows_stay_chronological_regardless_of_insert_order() {
        let mut agg = TimeBucketAggregator::new(30).unwrap();
        agg.record("p", 95, "late bass tweak");
        agg.record("p", 5, "early kick work");

        let starts: Vec<u32> = agg
            .temporal_report()
            .rows()
            .iter()
            .map(|r| r.bucket_start)
            .collect();
        assert_eq!(starts, vec![0, 90]);
    }

    #[test]
    fn sample_stops_at_three_lines_but_count_does_not() {
        let mut agg = TimeBucketAggregator::new(30).unwrap();
        agg.record("p", 1, "first kick line");
        agg.record("p", 2, "second snare line");
        agg.record("p", 3, "third bass line");
        agg.record("p", 4, "fourth synth line");

        let report = agg.temporal_report();
        let row = &report.rows()[0];
        assert_eq!(row.count, 4);
        assert_eq!(
            row.sample,
            "first kick line | second snare line | third bass line"
        );
    }

    #[test]
    fn producer_patterns_keep_encounter_order() {
        let mut agg = TimeBucketAggregator::new(30).unwrap();
        agg.record("alice", 65, "late bass move");
        agg.record("alice", 5, "early kick move");

        let patterns = agg.producer_patterns("alice");
        assert_eq!(patterns[0], (60, "late bass move".to_string()));
        assert_eq!(patterns[1], (0, "early kick move".to_string()));
    }

    #[test]
    fn unknown_producer_yields_empty_slice() {
        let agg = TimeBucketAggregator::new(30).unwrap();
        assert!(agg.producer_patterns("nobody").is_empty());
    }

    #[test]
    fn tracks_distinct_producers() {
        let mut agg = TimeBucketAggregator::new(30).unwrap();
        agg.record("alice", 5, "kick drum work");
        agg.record("bob", 10, "bass synth work");
        agg.record("alice", 40, "snare pattern work");

        assert_eq!(agg.producer_count(), 2);
        let names: Vec<&str> = agg.producers().collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn starts_empty() {
        let agg = TimeBucketAggregator::new(30).unwrap();
        assert!(agg.is_empty());
        assert!(agg.temporal_report().is_empty());
        assert_eq!(agg.producer_count(), 0);
    }
}
