//! Fixed color tables for chart series.
//!
//! Colors are assigned by group order: the i-th series of a chart gets the
//! i-th entry of its palette, wrapping around when a sweep has more groups
//! than the palette has entries.

use plotters::style::RGBColor;

/// Line colors for per-thread-count series.
pub const THREAD_SERIES: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// Line colors for per-chunk-size series.
pub const CHUNK_SERIES: [RGBColor; 7] = [
    RGBColor(228, 26, 28),
    RGBColor(55, 126, 184),
    RGBColor(77, 175, 74),
    RGBColor(152, 78, 163),
    RGBColor(255, 127, 0),
    RGBColor(166, 86, 40),
    RGBColor(247, 129, 191),
];

/// Bar fill for encryption in side-by-side comparisons.
pub const ENCRYPT_FILL: RGBColor = RGBColor(135, 206, 235);

/// Bar fill for decryption in side-by-side comparisons.
pub const DECRYPT_FILL: RGBColor = RGBColor(240, 128, 128);

/// Guide line color (ideal-scaling reference).
pub const GUIDE_LINE: RGBColor = RGBColor(128, 128, 128);

pub fn thread_color(index: usize) -> RGBColor {
    THREAD_SERIES[index % THREAD_SERIES.len()]
}

pub fn chunk_color(index: usize) -> RGBColor {
    CHUNK_SERIES[index % CHUNK_SERIES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_wrap_around() {
        assert_eq!(thread_color(0), thread_color(THREAD_SERIES.len()));
        assert_eq!(chunk_color(2), chunk_color(2 + CHUNK_SERIES.len()));
    }
}
