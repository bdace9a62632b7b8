//! Locate labeled sections inside a sweep log.
//!
//! The test harness writes its results as labeled blocks:
//!
//! ```text
//! === ENCRYPTION THREAD/CHUNK SWEEP ===
//! Threads | Chunk MB | Avg MB/s
//! 1       | 4        | 1180.52
//! ...
//! === DECRYPTION THREAD/CHUNK SWEEP ===
//! ...
//! ```
//!
//! A section runs from its `=== LABEL ===` marker to the next `===` marker
//! or the end of the text, so sections may appear in any order and adjacent
//! sections never bleed into each other.

/// Marker delimiting section headers.
pub const SECTION_MARKER: &str = "===";

/// Label of the encryption sweep section.
pub const ENCRYPTION_SECTION: &str = "ENCRYPTION THREAD/CHUNK SWEEP";

/// Label of the decryption sweep section.
pub const DECRYPTION_SECTION: &str = "DECRYPTION THREAD/CHUNK SWEEP";

/// Extract the body of the section labeled `label` from `text`.
///
/// # Parameters
///
/// * `text` - Full log text
/// * `label` - Section label, without the surrounding markers
///
/// # Returns
///
/// The text between `=== label ===` and the next `===` marker (or the end of
/// the text). An empty string if the section is absent. Whitespace between
/// the markers and the label is tolerated.
pub fn extract_section<'a>(text: &'a str, label: &str) -> &'a str {
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find(SECTION_MARKER) {
        let after_marker = search_from + found + SECTION_MARKER.len();
        search_from = after_marker;

        let Some(after_label) = text[after_marker..].trim_start().strip_prefix(label) else {
            continue;
        };
        let Some(body) = after_label.trim_start().strip_prefix(SECTION_MARKER) else {
            continue;
        };

        let end = body.find(SECTION_MARKER).unwrap_or(body.len());
        return &body[..end];
    }

    ""
}
