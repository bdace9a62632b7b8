//! Grouped line panels shared by the sweep and advanced figures.
//!
//! A panel groups the sweep by one dimension (threads or chunk size), sorts
//! each group by the other dimension, and draws one colored line per group.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

use super::ChartResult;
use super::palette;
use crate::parser::SweepTable;

/// One line on a panel.
pub struct Series {
    pub label: String,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

/// A panel description: title, axis labels, and its series.
pub struct Panel {
    pub title: String,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub series: Vec<Series>,
}

/// One series per thread count: throughput over chunk size.
pub fn series_per_thread(table: &SweepTable) -> Vec<Series> {
    table
        .unique_threads()
        .into_iter()
        .enumerate()
        .map(|(index, threads)| Series {
            label: format!("{threads} threads"),
            color: palette::thread_color(index),
            points: table
                .rows_for_threads(threads)
                .iter()
                .map(|r| (r.chunk_mb as f64, r.throughput_mbps))
                .collect(),
        })
        .collect()
}

/// One series per chunk size: throughput over thread count.
pub fn series_per_chunk(table: &SweepTable) -> Vec<Series> {
    table
        .unique_chunks()
        .into_iter()
        .enumerate()
        .map(|(index, chunk_mb)| Series {
            label: format!("{chunk_mb} MB"),
            color: palette::chunk_color(index),
            points: table
                .rows_for_chunk(chunk_mb)
                .iter()
                .map(|r| (r.threads as f64, r.throughput_mbps))
                .collect(),
        })
        .collect()
}

pub fn throughput_vs_chunk_panel(title: &str, table: &SweepTable) -> Panel {
    Panel {
        title: title.to_string(),
        x_desc: "Chunk Size (MB)",
        y_desc: "Throughput (MB/s)",
        series: series_per_thread(table),
    }
}

pub fn throughput_vs_threads_panel(title: &str, table: &SweepTable) -> Panel {
    Panel {
        title: title.to_string(),
        x_desc: "Number of Threads",
        y_desc: "Throughput (MB/s)",
        series: series_per_chunk(table),
    }
}

/// Axis ranges covering every point of every series, with padding on x and
/// headroom above the tallest value. `None` when there are no points.
pub fn axis_ranges(series: &[Series]) -> Option<(Range<f64>, Range<f64>)> {
    let mut points = series.iter().flat_map(|s| s.points.iter().copied());
    let (first_x, first_y) = points.next()?;

    let mut x_min = first_x;
    let mut x_max = first_x;
    let mut y_max = first_y;
    for (x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_max = y_max.max(y);
    }

    let x_pad = if x_max > x_min {
        (x_max - x_min) * 0.05
    } else {
        1.0
    };
    let y_top = if y_max > 0.0 { y_max * 1.08 } else { 1.0 };

    Some((x_min - x_pad..x_max + x_pad, 0.0..y_top))
}

/// Draw a panel into one cell of a figure.
pub fn draw_panel(area: &DrawingArea<BitMapBackend<'_>, Shift>, panel: &Panel) -> ChartResult {
    let Some((x_range, y_range)) = axis_ranges(&panel.series) else {
        log::debug!("panel '{}' has no data points", panel.title);
        return Ok(());
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .draw()?;

    for series in &panel.series {
        let color = series.color;
        chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
        chart.draw_series(
            series
                .points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::MeasurementRow;

    fn table() -> SweepTable {
        SweepTable::new(vec![
            MeasurementRow {
                threads: 2,
                chunk_mb: 8,
                throughput_mbps: 280.0,
            },
            MeasurementRow {
                threads: 1,
                chunk_mb: 8,
                throughput_mbps: 150.0,
            },
            MeasurementRow {
                threads: 1,
                chunk_mb: 4,
                throughput_mbps: 100.0,
            },
            MeasurementRow {
                threads: 2,
                chunk_mb: 4,
                throughput_mbps: 190.0,
            },
        ])
    }

    #[test]
    fn test_series_per_thread_sorted_by_chunk() {
        let series = series_per_thread(&table());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "1 threads");
        assert_eq!(series[0].points, vec![(4.0, 100.0), (8.0, 150.0)]);
        assert_eq!(series[1].points, vec![(4.0, 190.0), (8.0, 280.0)]);
    }

    #[test]
    fn test_series_per_chunk_sorted_by_threads() {
        let series = series_per_chunk(&table());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "4 MB");
        assert_eq!(series[0].points, vec![(1.0, 100.0), (2.0, 190.0)]);
        assert_eq!(series[1].points, vec![(1.0, 150.0), (2.0, 280.0)]);
    }

    #[test]
    fn test_colors_follow_group_order() {
        let series = series_per_thread(&table());
        assert_eq!(series[0].color, palette::thread_color(0));
        assert_eq!(series[1].color, palette::thread_color(1));
    }

    #[test]
    fn test_axis_ranges_cover_all_points() {
        let series = series_per_thread(&table());
        let (x, y) = axis_ranges(&series).unwrap();
        assert!(x.start < 4.0 && x.end > 8.0);
        assert_eq!(y.start, 0.0);
        assert!(y.end > 280.0);
    }

    #[test]
    fn test_axis_ranges_degenerate_x() {
        let series = vec![Series {
            label: "one".into(),
            color: palette::thread_color(0),
            points: vec![(4.0, 10.0)],
        }];
        let (x, _) = axis_ranges(&series).unwrap();
        assert!(x.start < 4.0 && x.end > 4.0);
    }

    #[test]
    fn test_axis_ranges_empty() {
        assert!(axis_ranges(&[]).is_none());
    }
}
