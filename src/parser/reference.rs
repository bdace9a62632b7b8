//! Parse the external cipher benchmark summary (OpenSSL `speed -evp`).
//!
//! Two formats are attempted, because the tool's output varies between
//! versions and invocation modes:
//!
//! Primary, the summary table printed at the end of a run (values are
//! thousands of bytes per second):
//!
//! ```text
//! type             16 bytes     64 bytes    256 bytes
//! AES-128-GCM     103872.58k   110000.00k   115000.00k
//! ```
//!
//! Fallback, the per-block progress lines printed while the run executes:
//!
//! ```text
//! Doing AES-128-GCM ops for 3s on 16 size blocks: 19070356 AES-128-GCM ops in 2.94s
//! ```
//!
//! Fallback throughput is `ops * block_bytes / seconds` bytes per second,
//! reported in decimal MB/s. Rows come out sorted ascending by block size.

use super::scan::{leading_float, leading_integer};
use super::types::{REFERENCE_LABEL, ReferenceRow, ReferenceTable};

/// Row label of the summary table.
const SUMMARY_ROW_PREFIX: &str = "AES-128-GCM";

/// Parse benchmark summary text, trying the table format first and the
/// per-block timing lines if no table is present.
///
/// Input that matches neither format yields an empty table, never an error.
pub fn parse_reference_text(text: &str) -> ReferenceTable {
    parse_summary_table(text).unwrap_or_else(|| parse_block_timings(text))
}

/// Parse the end-of-run summary table.
///
/// Returns `None` unless both the size header and the cipher row are found.
/// Header sizes and row values are aligned by truncating to the shorter of
/// the two.
fn parse_summary_table(text: &str) -> Option<ReferenceTable> {
    let sizes = text.lines().find_map(parse_size_header)?;
    let rates = text.lines().find_map(parse_rate_row)?;

    let rows = sizes
        .into_iter()
        .zip(rates)
        .map(|(block_bytes, kbytes_per_sec)| ReferenceRow {
            block_bytes,
            // thousands of bytes/s to decimal MB/s
            throughput_mbps: kbytes_per_sec / 1000.0,
            label: REFERENCE_LABEL,
        })
        .collect();

    Some(ReferenceTable::new(rows))
}

/// Parse a `type  16 bytes  64 bytes ...` header line into block sizes.
///
/// The line must consist of the `type` keyword followed only by
/// `<size> bytes` pairs.
fn parse_size_header(line: &str) -> Option<Vec<u64>> {
    let rest = line.strip_prefix("type")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut sizes = Vec::new();
    let mut tokens = rest.split_whitespace();
    while let Some(token) = tokens.next() {
        let size: u64 = token.parse().ok()?;
        if tokens.next()? != "bytes" {
            return None;
        }
        sizes.push(size);
    }

    if sizes.is_empty() { None } else { Some(sizes) }
}

/// Parse the cipher data row into k-suffixed rates (thousands of bytes/s).
fn parse_rate_row(line: &str) -> Option<Vec<f64>> {
    let rest = line.strip_prefix(SUMMARY_ROW_PREFIX)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rates: Vec<f64> = rest
        .split_whitespace()
        .filter_map(|token| token.strip_suffix('k'))
        .filter_map(|value| value.parse().ok())
        .collect();

    if rates.is_empty() { None } else { Some(rates) }
}

/// Gather reference rows from per-block timing lines.
fn parse_block_timings(text: &str) -> ReferenceTable {
    let rows = text.lines().filter_map(parse_timing_line).collect();
    ReferenceTable::new(rows)
}

/// Parse one `... on <N> size blocks: <ops> ... ops in <T>s` line.
///
/// Lines with a non-positive duration are skipped.
fn parse_timing_line(line: &str) -> Option<ReferenceRow> {
    let (before_blocks, rest) = line.split_once(" size blocks:")?;
    let on_pos = before_blocks.rfind(" on ")?;
    let block_bytes: u64 = before_blocks[on_pos + 4..].trim().parse().ok()?;

    let (ops, _) = leading_integer(rest.trim_start())?;

    let in_pos = rest.find(" ops in ")?;
    let duration_text = rest[in_pos + 8..].trim_start();
    let (seconds, consumed) = leading_float(duration_text)?;
    if !duration_text[consumed..].starts_with('s') {
        return None;
    }
    if seconds <= 0.0 {
        return None;
    }

    let bytes_per_sec = ops as f64 * block_bytes as f64 / seconds;
    Some(ReferenceRow {
        block_bytes,
        throughput_mbps: bytes_per_sec / 1_000_000.0,
        label: REFERENCE_LABEL,
    })
}
