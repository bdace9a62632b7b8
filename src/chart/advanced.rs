//! The six-panel analysis figure.
//!
//! Panels 1-4 repeat the sweep figure. Panel 5 compares the maximum
//! throughput reached at each thread count. Panel 6 shows scaling
//! efficiency: speedup over the single-thread baseline at the middle chunk
//! size, against an ideal-linear guide line.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use super::ChartResult;
use super::palette;
use super::panel::{draw_panel, throughput_vs_chunk_panel, throughput_vs_threads_panel};
use crate::parser::SweepTable;

/// Output file name of the advanced figure.
pub const ADVANCED_CHART_FILE: &str = "advanced_performance_analysis.png";

const WIDTH: u32 = 2000;
const HEIGHT: u32 = 1600;

/// Render the 3x2 advanced analysis figure.
///
/// Skipped with a warning when either table is empty. The scaling panel is
/// left out when no single-thread baseline exists in the data.
pub fn render_advanced(enc: &SweepTable, dec: &SweepTable, out: &Path) -> ChartResult {
    if enc.is_empty() || dec.is_empty() {
        log::warn!("sweep data is empty; skipping {}", ADVANCED_CHART_FILE);
        return Ok(());
    }

    let root = BitMapBackend::new(out, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Complete Performance Analysis: Encryption/Decryption Throughput",
        ("sans-serif", 36),
    )?;

    let areas = root.split_evenly((3, 2));

    let panels = [
        throughput_vs_chunk_panel("Encryption: Throughput vs Chunk Size", enc),
        throughput_vs_chunk_panel("Decryption: Throughput vs Chunk Size", dec),
        throughput_vs_threads_panel("Encryption: Throughput vs Threads", enc),
        throughput_vs_threads_panel("Decryption: Throughput vs Threads", dec),
    ];
    for (area, panel) in areas.iter().zip(&panels) {
        draw_panel(area, panel)?;
    }

    draw_max_by_threads_bars(&areas[4], enc, dec)?;

    match middle_chunk(enc) {
        Some(chunk_mb) => draw_scaling_panel(&areas[5], enc, dec, chunk_mb)?,
        None => log::debug!("no chunk sizes available for the scaling panel"),
    }

    root.present()?;
    Ok(())
}

/// Panel 5: side-by-side bars of max throughput per thread count.
fn draw_max_by_threads_bars(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    enc: &SweepTable,
    dec: &SweepTable,
) -> ChartResult {
    let threads = enc.unique_threads();
    let bars: Vec<(f64, f64, f64)> = threads
        .iter()
        .enumerate()
        .map(|(index, &t)| {
            (
                index as f64,
                enc.max_for_threads(t).unwrap_or(0.0),
                dec.max_for_threads(t).unwrap_or(0.0),
            )
        })
        .collect();

    let y_max = bars
        .iter()
        .map(|&(_, e, d)| e.max(d))
        .fold(0.0f64, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.12 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption("Maximum Throughput by Thread Count", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.6..threads.len() as f64 - 0.4, 0.0..y_top)?;

    chart
        .configure_mesh()
        .x_labels(threads.len())
        .x_label_formatter(&|x| {
            let index = x.round() as usize;
            if (x - index as f64).abs() < 0.01 && index < threads.len() {
                threads[index].to_string()
            } else {
                String::new()
            }
        })
        .x_desc("Number of Threads")
        .y_desc("Max Throughput (MB/s)")
        .draw()?;

    chart
        .draw_series(bars.iter().map(|&(x, e, _)| {
            Rectangle::new([(x - 0.35, 0.0), (x, e)], palette::ENCRYPT_FILL.filled())
        }))?
        .label("Encryption")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], palette::ENCRYPT_FILL.filled())
        });

    chart
        .draw_series(bars.iter().map(|&(x, _, d)| {
            Rectangle::new([(x, 0.0), (x + 0.35, d)], palette::DECRYPT_FILL.filled())
        }))?
        .label("Decryption")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], palette::DECRYPT_FILL.filled())
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Panel 6: speedup over the single-thread baseline at `chunk_mb`.
fn draw_scaling_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    enc: &SweepTable,
    dec: &SweepTable,
    chunk_mb: u32,
) -> ChartResult {
    let enc_scaling = scaling_series(enc, chunk_mb);
    let dec_scaling = scaling_series(dec, chunk_mb);
    let (Some(enc_scaling), Some(dec_scaling)) = (enc_scaling, dec_scaling) else {
        log::debug!("no single-thread baseline at {chunk_mb} MB chunks; skipping scaling panel");
        return Ok(());
    };

    let threads: Vec<f64> = enc_scaling.iter().map(|&(t, _)| t).collect();
    let t_min = threads.iter().copied().fold(f64::MAX, f64::min);
    let t_max = threads.iter().copied().fold(f64::MIN, f64::max);

    let y_max = enc_scaling
        .iter()
        .chain(&dec_scaling)
        .map(|&(_, s)| s)
        .fold(t_max, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Scaling Efficiency ({chunk_mb} MB chunks)"),
            ("sans-serif", 22),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(t_min - 0.5..t_max + 0.5, 0.0..y_max * 1.08)?;

    chart
        .configure_mesh()
        .x_desc("Number of Threads")
        .y_desc("Speedup Factor")
        .draw()?;

    let lines = [
        ("Encryption Scaling", enc_scaling, palette::thread_color(0)),
        ("Decryption Scaling", dec_scaling, palette::thread_color(3)),
        (
            "Ideal Linear Scaling",
            vec![(t_min, t_min), (t_max, t_max)],
            palette::GUIDE_LINE,
        ),
    ];

    for (label, points, color) in lines {
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// The middle entry of the table's chunk sizes.
pub(crate) fn middle_chunk(table: &SweepTable) -> Option<u32> {
    let chunks = table.unique_chunks();
    if chunks.is_empty() {
        None
    } else {
        Some(chunks[chunks.len() / 2])
    }
}

/// Speedup per thread count relative to the single-thread mean at
/// `chunk_mb`. `None` when there is no usable single-thread baseline.
pub(crate) fn scaling_series(table: &SweepTable, chunk_mb: u32) -> Option<Vec<(f64, f64)>> {
    let baseline = table.mean_for(1, chunk_mb)?;
    if baseline <= 0.0 {
        return None;
    }

    Some(
        table
            .unique_threads()
            .into_iter()
            .filter_map(|threads| {
                table
                    .mean_for(threads, chunk_mb)
                    .map(|mean| (threads as f64, mean / baseline))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_sweep_section;

    #[test]
    fn test_middle_chunk() {
        let table = parse_sweep_section("1 | 4 | 10.0\n1 | 8 | 11.0\n1 | 16 | 12.0\n");
        assert_eq!(middle_chunk(&table), Some(8));
        assert_eq!(middle_chunk(&SweepTable::default()), None);
    }

    #[test]
    fn test_scaling_series_relative_to_single_thread() {
        let table = parse_sweep_section("1 | 8 | 100.0\n2 | 8 | 190.0\n4 | 8 | 320.0\n");
        let scaling = scaling_series(&table, 8).unwrap();
        assert_eq!(scaling, vec![(1.0, 1.0), (2.0, 1.9), (4.0, 3.2)]);
    }

    #[test]
    fn test_scaling_series_without_baseline() {
        let table = parse_sweep_section("2 | 8 | 190.0\n4 | 8 | 320.0\n");
        assert!(scaling_series(&table, 8).is_none());
    }

    #[test]
    fn test_empty_tables_skip_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(ADVANCED_CHART_FILE);

        render_advanced(&SweepTable::default(), &SweepTable::default(), &out).unwrap();
        assert!(!out.exists());
    }
}
