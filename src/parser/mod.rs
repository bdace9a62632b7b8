//! Parsers turning raw benchmark log text into tabular data.
//!
//! Two independent input formats are handled:
//! - Sweep logs from the throughput test harness, with `=== LABEL ===`
//!   section markers and pipe-delimited measurement rows
//! - Summary output from the external OpenSSL `speed` benchmark, in either
//!   its table form or its per-block timing lines
//!
//! All parsers are best-effort: malformed lines are skipped and absent
//! sections yield empty tables instead of errors.

pub mod reference;
pub mod scan;
pub mod section;
pub mod sweep;
pub mod types;

pub use reference::parse_reference_text;
pub use section::{DECRYPTION_SECTION, ENCRYPTION_SECTION, extract_section};
pub use sweep::parse_sweep_section;
pub use types::{MeasurementRow, ReferenceRow, ReferenceTable, SweepTable};
