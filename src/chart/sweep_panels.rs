//! The four-panel sweep figure.

use plotters::prelude::*;
use std::path::Path;

use super::ChartResult;
use super::panel::{draw_panel, throughput_vs_chunk_panel, throughput_vs_threads_panel};
use crate::parser::SweepTable;

/// Output file name of the sweep figure.
pub const SWEEP_CHART_FILE: &str = "library_performance.png";

const WIDTH: u32 = 1600;
const HEIGHT: u32 = 1200;

/// Render the 2x2 sweep figure: throughput vs chunk size (per thread count)
/// and vs thread count (per chunk size), for encryption and decryption.
///
/// Skipped with a warning when either table is empty.
pub fn render_sweep_panels(enc: &SweepTable, dec: &SweepTable, out: &Path) -> ChartResult {
    if enc.is_empty() || dec.is_empty() {
        log::warn!("sweep data is empty; skipping {}", SWEEP_CHART_FILE);
        return Ok(());
    }

    let root = BitMapBackend::new(out, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Cipher Pipeline Performance: Encryption/Decryption Throughput",
        ("sans-serif", 36),
    )?;

    let panels = [
        throughput_vs_chunk_panel("Encryption: Throughput vs Chunk Size", enc),
        throughput_vs_chunk_panel("Decryption: Throughput vs Chunk Size", dec),
        throughput_vs_threads_panel("Encryption: Throughput vs Threads", enc),
        throughput_vs_threads_panel("Decryption: Throughput vs Threads", dec),
    ];

    let areas = root.split_evenly((2, 2));
    for (area, panel) in areas.iter().zip(&panels) {
        draw_panel(area, panel)?;
    }

    root.present()?;
    Ok(())
}
