//! Timestamped transcript line parsing.
//!
//! Transcript files carry one speech segment per line in the form
//! `H:M:S: text` (colon-separated clock components of any digit width).
//! [`parse_timestamp_line`] turns one such line into a [`TranscriptLine`];
//! anything else yields `None`, which callers treat as "not a data line"
//! rather than an error.  Section headers, blank lines and decoration are
//! normal occurrences in these files.

// ---------------------------------------------------------------------------
// TranscriptLine
// ---------------------------------------------------------------------------

/// A single parsed transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Offset from the start of the recording, in whole seconds.
    pub offset_seconds: u32,
    /// Narration text with surrounding whitespace trimmed.
    pub text: String,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse one `H:M:S: text` line into a [`TranscriptLine`].
///
/// The line is split once on the first `": "`; the left part must be exactly
/// three colon-separated non-negative integers, which are combined as
/// `h * 3600 + m * 60 + s`.  The text keeps any colons of its own since only
/// the first separator splits.
///
/// # Example
/// ```rust
/// use session_miner::transcript::parse_timestamp_line;
///
/// let line = parse_timestamp_line("0:01:30:  laying down the kick  ").unwrap();
/// assert_eq!(line.offset_seconds, 90);
/// assert_eq!(line.text, "laying down the kick");
/// ```
pub fn parse_timestamp_line(line: &str) -> Option<TranscriptLine> {
    let (clock, text) = line.split_once(": ")?;

    let mut parts = clock.split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        // More than three clock components
        return None;
    }

    let offset_seconds = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;

    Some(TranscriptLine {
        offset_seconds,
        text: text.trim().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_line() {
        let line = parse_timestamp_line("0:00:05: adding a drum loop").unwrap();
        assert_eq!(line.offset_seconds, 5);
        assert_eq!(line.text, "adding a drum loop");
    }

    #[test]
    fn combines_hours_minutes_seconds() {
        let line = parse_timestamp_line("1:02:03: tweaking the patch").unwrap();
        assert_eq!(line.offset_seconds, 3723);
    }

    #[test]
    fn accepts_variable_width_components() {
        let line = parse_timestamp_line("00:1:5: short clock widths").unwrap();
        assert_eq!(line.offset_seconds, 65);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let line = parse_timestamp_line("0:00:10:   padded out   ").unwrap();
        assert_eq!(line.text, "padded out");
    }

    #[test]
    fn keeps_colons_inside_the_text() {
        let line = parse_timestamp_line("0:00:10: tip: lower the filter cutoff").unwrap();
        assert_eq!(line.text, "tip: lower the filter cutoff");
    }

    #[test]
    fn rejects_line_without_separator() {
        assert_eq!(parse_timestamp_line("no separator here"), None);
        assert_eq!(parse_timestamp_line(""), None);
    }

    #[test]
    fn rejects_two_clock_components() {
        assert_eq!(parse_timestamp_line("5:30: only minutes and seconds"), None);
    }

    #[test]
    fn rejects_four_clock_components() {
        assert_eq!(parse_timestamp_line("1:2:3:4: too many pieces"), None);
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert_eq!(parse_timestamp_line("a:b:c: nonsense clock"), None);
        assert_eq!(parse_timestamp_line("0:xx:05: partial nonsense"), None);
    }

    #[test]
    fn rejects_negative_components() {
        assert_eq!(parse_timestamp_line("-1:00:00: negative hour"), None);
    }

    #[test]
    fn rejects_empty_clock() {
        assert_eq!(parse_timestamp_line(": text without a clock"), None);
    }

    #[test]
    fn rejects_overflowing_clock() {
        assert_eq!(parse_timestamp_line("4294967295:0:0: absurd hour"), None);
    }
}
