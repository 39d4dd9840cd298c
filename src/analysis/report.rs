//! Temporal report rows and queries over aggregated buckets.
//!
//! A [`TemporalReport`] is an immutable snapshot of one analysis run: one
//! [`ReportRow`] per non-empty bucket, in ascending bucket order.  Queries
//! ([`TemporalReport::top_n`]) and rendering never touch the aggregator
//! again, so a report stays valid after more lines are recorded.

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// How many matched lines a row samples from its bucket.
pub(crate) const SAMPLE_LIMIT: usize = 3;

/// Separator between sampled lines.
pub(crate) const SAMPLE_SEPARATOR: &str = " | ";

// ---------------------------------------------------------------------------
// Clock formatting
// ---------------------------------------------------------------------------

/// Format a second offset as `MM:SS`.
///
/// Minutes are a plain running count and are not wrapped at 60, so a bucket
/// starting 90 minutes in renders as `90:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

// ---------------------------------------------------------------------------
// ReportRow
// ---------------------------------------------------------------------------

/// One bucket of the temporal report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Bucket start offset in seconds (a multiple of the bucket width).
    pub bucket_start: u32,
    /// Bucket start as `MM:SS`.
    pub clock: String,
    /// Number of matched lines recorded in this bucket.
    pub count: usize,
    /// Up to the first 3 matched lines, in recording order, joined with
    /// `" | "`.
    pub sample: String,
}

// ---------------------------------------------------------------------------
// TemporalReport
// ---------------------------------------------------------------------------

/// Chronological activity report for one analysis run.
///
/// # Example
/// ```rust
/// use session_miner::analysis::TimeBucketAggregator;
///
/// let mut agg = TimeBucketAggregator::new(30).unwrap();
/// agg.record("alice", 5, "adding a kick drum");
/// agg.record("alice", 35, "now the snare pattern");
///
/// let report = agg.temporal_report();
/// assert_eq!(report.rows()[0].clock, "00:00");
/// assert_eq!(report.rows()[1].clock, "00:30");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemporalReport {
    rows: Vec<ReportRow>,
}

impl TemporalReport {
    pub(crate) fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }

    /// All rows in ascending bucket order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of rows (one per non-empty bucket).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `n` rows with the largest counts, most active first.
    ///
    /// Ties resolve to the earlier bucket.  Asking for more rows than exist
    /// returns them all.
    pub fn top_n(&self, n: usize) -> Vec<&ReportRow> {
        let mut by_count: Vec<&ReportRow> = self.rows.iter().collect();
        // Stable sort: rows with equal counts keep ascending bucket order
        by_count.sort_by(|a, b| b.count.cmp(&a.count));
        by_count.truncate(n);
        by_count
    }

    /// Render the report as an aligned text table.
    pub fn render(&self) -> String {
        let mut out = String::from(" time  count  actions\n");
        for row in &self.rows {
            out.push_str(&format!(
                "{:>5}  {:>5}  {}\n",
                row.clock, row.count, row.sample
            ));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bucket_start: u32, count: usize) -> ReportRow {
        ReportRow {
            bucket_start,
            clock: format_clock(bucket_start),
            count,
            sample: String::new(),
        }
    }

    #[test]
    fn formats_clock_as_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn clock_minutes_do_not_wrap_at_sixty() {
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(5430), "90:30");
    }

    #[test]
    fn top_n_orders_by_count_descending() {
        let report = TemporalReport::new(vec![row(0, 2), row(30, 7), row(60, 4)]);
        assert_eq!(report.len(), 3);
        let top = report.top_n(2);
        assert_eq!(top[0].bucket_start, 30);
        assert_eq!(top[1].bucket_start, 60);
    }

    #[test]
    fn top_n_ties_resolve_to_earlier_bucket() {
        let report =
            TemporalReport::new(vec![row(0, 5), row(30, 9), row(60, 9), row(90, 2)]);
        let top = report.top_n(2);
        assert_eq!(top[0].bucket_start, 30);
        assert_eq!(top[1].bucket_start, 60);
    }

    #[test]
    fn top_n_caps_at_row_count() {
        let report = TemporalReport::new(vec![row(0, 1)]);
        assert_eq!(report.top_n(10).len(), 1);
        assert!(TemporalReport::default().top_n(3).is_empty());
    }

    #[test]
    fn render_lists_every_row() {
        let mut r = row(90, 2);
        r.sample = "kick in | snare out".to_string();
        let report = TemporalReport::new(vec![r]);
        let text = report.render();
        assert!(text.contains("01:30"));
        assert!(text.contains("kick in | snare out"));
    }
}
