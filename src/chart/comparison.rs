//! Comparison figure against the external cipher benchmark.
//!
//! The external tool varies small buffer sizes while the pipeline varies
//! file chunk sizes, so the x axis is bytes on a log scale and the pipeline
//! curves use the best throughput reached per chunk size across all thread
//! counts. The scales differ; the figure is an approximate visual
//! comparison, not a like-for-like benchmark.

use plotters::prelude::*;
use std::path::Path;

use super::ChartResult;
use super::palette;
use crate::parser::types::REFERENCE_LABEL;
use crate::parser::{ReferenceTable, SweepTable};

/// Output file name of the comparison figure.
pub const COMPARISON_CHART_FILE: &str = "openssl_comparison.png";

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

/// Bytes per decimal megabyte, for converting chunk sizes to the byte axis.
const BYTES_PER_MB: f64 = 1_000_000.0;

/// Render the reference-vs-pipeline comparison figure.
///
/// Skipped with a warning when any input table is empty.
pub fn render_comparison(
    enc: &SweepTable,
    dec: &SweepTable,
    reference: &ReferenceTable,
    out: &Path,
) -> ChartResult {
    if reference.is_empty() {
        log::warn!("reference data is empty; skipping {}", COMPARISON_CHART_FILE);
        return Ok(());
    }
    if enc.is_empty() || dec.is_empty() {
        log::warn!("sweep data is empty; skipping {}", COMPARISON_CHART_FILE);
        return Ok(());
    }

    let reference_points: Vec<(f64, f64)> = reference
        .rows()
        .iter()
        .map(|r| (r.block_bytes as f64, r.throughput_mbps))
        .collect();
    let enc_points = best_per_chunk_bytes(enc);
    let dec_points = best_per_chunk_bytes(dec);

    let all_points = reference_points
        .iter()
        .chain(&enc_points)
        .chain(&dec_points);
    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut y_max = 0.0f64;
    for &(x, y) in all_points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_max = y_max.max(y);
    }
    let y_top = if y_max > 0.0 { y_max * 1.08 } else { 1.0 };

    let root = BitMapBackend::new(out, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Pipeline vs OpenSSL: Throughput vs Buffer/Chunk Size",
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min / 2.0..x_max * 2.0).log_scale(), 0.0..y_top)?;

    chart
        .configure_mesh()
        .x_desc("Buffer / Chunk Size (bytes, log scale)")
        .y_desc("Throughput (MB/s)")
        .draw()?;

    let lines = [
        (REFERENCE_LABEL, reference_points, palette::thread_color(0)),
        ("Pipeline Encrypt (best per chunk)", enc_points, palette::thread_color(1)),
        ("Pipeline Decrypt (best per chunk)", dec_points, palette::thread_color(2)),
    ];

    for (label, points, color) in lines {
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Best throughput per chunk, with the chunk size converted to bytes.
fn best_per_chunk_bytes(table: &SweepTable) -> Vec<(f64, f64)> {
    table
        .best_per_chunk()
        .into_iter()
        .map(|(chunk_mb, throughput)| (chunk_mb as f64 * BYTES_PER_MB, throughput))
        .collect()
}
