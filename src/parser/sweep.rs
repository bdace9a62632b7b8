//! Parse measurement rows from a sweep section body.
//!
//! A data row is `<threads> | <chunk MB> | <throughput MB/s>`:
//!
//! ```text
//! 4 | 16 | 4410.37
//! ```
//!
//! Scanning is whitespace-tolerant and ignores trailing content after the
//! throughput value. Header lines, dividers, and any other non-matching
//! lines are skipped silently.

use super::scan::{leading_float, trailing_integer};
use super::types::{MeasurementRow, SweepTable};

/// Parse every data row in a section body, in encounter order.
///
/// Duplicate rows are preserved as-is.
pub fn parse_sweep_section(body: &str) -> SweepTable {
    let rows = body.lines().filter_map(parse_sweep_line).collect();
    SweepTable::new(rows)
}

/// Parse a single `<int> | <int> | <float>` line.
///
/// Returns `None` for lines that do not contain a data row. Content before
/// the threads value is tolerated: matching restarts after each `|` until a
/// row is found or the line is exhausted.
fn parse_sweep_line(line: &str) -> Option<MeasurementRow> {
    let mut rest = line;
    loop {
        let (first, tail) = rest.split_once('|')?;
        if let Some(row) = parse_row_fields(first, tail) {
            return Some(row);
        }
        rest = tail;
    }
}

/// Try to read the three row fields given the text around the first `|`.
fn parse_row_fields(first: &str, tail: &str) -> Option<MeasurementRow> {
    let threads = trailing_integer(first.trim_end())?;
    let (second, value) = tail.split_once('|')?;
    let chunk_mb: u32 = second.trim().parse().ok()?;
    let (throughput_mbps, _) = leading_float(value.trim_start())?;

    Some(MeasurementRow {
        threads,
        chunk_mb,
        throughput_mbps,
    })
}
