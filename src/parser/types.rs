//! Tabular data produced by the parsers.
//!
//! Tables are immutable once built: parse, read, discard.

use std::cmp::Ordering;

/// Display label attached to every reference row.
pub const REFERENCE_LABEL: &str = "OpenSSL AES-128-GCM";

/// One measurement from a thread/chunk sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRow {
    /// Worker thread count, positive.
    pub threads: u32,
    /// Chunk size in decimal megabytes, positive.
    pub chunk_mb: u32,
    /// Average throughput in MB/s, non-negative.
    pub throughput_mbps: f64,
}

/// Ordered sweep measurements. Duplicates are preserved as parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepTable {
    rows: Vec<MeasurementRow>,
}

impl SweepTable {
    pub fn new(rows: Vec<MeasurementRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct thread counts, ascending.
    pub fn unique_threads(&self) -> Vec<u32> {
        let mut values: Vec<u32> = self.rows.iter().map(|r| r.threads).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Distinct chunk sizes in MB, ascending.
    pub fn unique_chunks(&self) -> Vec<u32> {
        let mut values: Vec<u32> = self.rows.iter().map(|r| r.chunk_mb).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Rows measured with `threads` threads, sorted by chunk size.
    pub fn rows_for_threads(&self, threads: u32) -> Vec<MeasurementRow> {
        let mut rows: Vec<MeasurementRow> = self
            .rows
            .iter()
            .filter(|r| r.threads == threads)
            .copied()
            .collect();
        rows.sort_by_key(|r| r.chunk_mb);
        rows
    }

    /// Rows measured with `chunk_mb` MB chunks, sorted by thread count.
    pub fn rows_for_chunk(&self, chunk_mb: u32) -> Vec<MeasurementRow> {
        let mut rows: Vec<MeasurementRow> = self
            .rows
            .iter()
            .filter(|r| r.chunk_mb == chunk_mb)
            .copied()
            .collect();
        rows.sort_by_key(|r| r.threads);
        rows
    }

    /// The row with the highest throughput.
    pub fn best(&self) -> Option<MeasurementRow> {
        self.rows
            .iter()
            .copied()
            .max_by(|a, b| cmp_f64(a.throughput_mbps, b.throughput_mbps))
    }

    pub fn max_throughput(&self) -> Option<f64> {
        self.best().map(|r| r.throughput_mbps)
    }

    pub fn min_throughput(&self) -> Option<f64> {
        self.rows
            .iter()
            .map(|r| r.throughput_mbps)
            .min_by(|a, b| cmp_f64(*a, *b))
    }

    pub fn mean_throughput(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let sum: f64 = self.rows.iter().map(|r| r.throughput_mbps).sum();
        Some(sum / self.rows.len() as f64)
    }

    pub fn median_throughput(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let mut values: Vec<f64> = self.rows.iter().map(|r| r.throughput_mbps).collect();
        values.sort_by(|a, b| cmp_f64(*a, *b));
        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            Some((values[mid - 1] + values[mid]) / 2.0)
        } else {
            Some(values[mid])
        }
    }

    /// Highest throughput reached for each chunk size, ascending by chunk.
    pub fn best_per_chunk(&self) -> Vec<(u32, f64)> {
        self.unique_chunks()
            .into_iter()
            .filter_map(|chunk| {
                self.rows_for_chunk(chunk)
                    .iter()
                    .map(|r| r.throughput_mbps)
                    .max_by(|a, b| cmp_f64(*a, *b))
                    .map(|max| (chunk, max))
            })
            .collect()
    }

    /// Mean throughput for each chunk size, ascending by chunk.
    pub fn mean_per_chunk(&self) -> Vec<(u32, f64)> {
        self.unique_chunks()
            .into_iter()
            .filter_map(|chunk| {
                let rows = self.rows_for_chunk(chunk);
                if rows.is_empty() {
                    return None;
                }
                let sum: f64 = rows.iter().map(|r| r.throughput_mbps).sum();
                Some((chunk, sum / rows.len() as f64))
            })
            .collect()
    }

    /// Highest throughput reached with `threads` threads across all chunks.
    pub fn max_for_threads(&self, threads: u32) -> Option<f64> {
        self.rows_for_threads(threads)
            .iter()
            .map(|r| r.throughput_mbps)
            .max_by(|a, b| cmp_f64(*a, *b))
    }

    /// Mean throughput of the rows matching both dimensions.
    pub fn mean_for(&self, threads: u32, chunk_mb: u32) -> Option<f64> {
        let values: Vec<f64> = self
            .rows
            .iter()
            .filter(|r| r.threads == threads && r.chunk_mb == chunk_mb)
            .map(|r| r.throughput_mbps)
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// One row from the external cipher benchmark summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRow {
    /// Cipher operation input size in bytes.
    pub block_bytes: u64,
    /// Throughput in decimal MB/s.
    pub throughput_mbps: f64,
    pub label: &'static str,
}

/// Reference measurements, sorted ascending by block size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    /// Build a table, sorting rows ascending by block size.
    pub fn new(mut rows: Vec<ReferenceRow>) -> Self {
        rows.sort_by_key(|r| r.block_bytes);
        Self { rows }
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row with the highest throughput.
    pub fn best(&self) -> Option<ReferenceRow> {
        self.rows
            .iter()
            .copied()
            .max_by(|a, b| cmp_f64(a.throughput_mbps, b.throughput_mbps))
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(threads: u32, chunk_mb: u32, throughput_mbps: f64) -> MeasurementRow {
        MeasurementRow {
            threads,
            chunk_mb,
            throughput_mbps,
        }
    }

    fn sample() -> SweepTable {
        SweepTable::new(vec![
            row(2, 8, 280.0),
            row(1, 4, 100.0),
            row(2, 4, 190.0),
            row(1, 8, 150.0),
        ])
    }

    #[test]
    fn test_unique_dimensions_sorted() {
        let table = sample();
        assert_eq!(table.unique_threads(), vec![1, 2]);
        assert_eq!(table.unique_chunks(), vec![4, 8]);
    }

    #[test]
    fn test_group_and_sort() {
        let table = sample();
        let by_chunk = table.rows_for_threads(2);
        assert_eq!(by_chunk.len(), 2);
        assert_eq!(by_chunk[0].chunk_mb, 4);
        assert_eq!(by_chunk[1].chunk_mb, 8);

        let by_threads = table.rows_for_chunk(8);
        assert_eq!(by_threads[0].threads, 1);
        assert_eq!(by_threads[1].threads, 2);
    }

    #[test]
    fn test_aggregates() {
        let table = sample();
        let best = table.best().unwrap();
        assert_eq!((best.threads, best.chunk_mb), (2, 8));
        assert_eq!(table.max_throughput(), Some(280.0));
        assert_eq!(table.min_throughput(), Some(100.0));
        assert_eq!(table.mean_throughput(), Some(180.0));
        assert_eq!(table.median_throughput(), Some(170.0));
    }

    #[test]
    fn test_best_per_chunk() {
        let table = sample();
        assert_eq!(table.best_per_chunk(), vec![(4, 190.0), (8, 280.0)]);
    }

    #[test]
    fn test_mean_per_chunk() {
        let table = sample();
        assert_eq!(table.mean_per_chunk(), vec![(4, 145.0), (8, 215.0)]);
    }

    #[test]
    fn test_empty_table_aggregates() {
        let table = SweepTable::default();
        assert!(table.best().is_none());
        assert!(table.mean_throughput().is_none());
        assert!(table.median_throughput().is_none());
        assert!(table.best_per_chunk().is_empty());
    }

    #[test]
    fn test_reference_table_sorted_with_best() {
        let table = ReferenceTable::new(vec![
            ReferenceRow {
                block_bytes: 256,
                throughput_mbps: 115.0,
                label: REFERENCE_LABEL,
            },
            ReferenceRow {
                block_bytes: 16,
                throughput_mbps: 103.87,
                label: REFERENCE_LABEL,
            },
        ]);
        assert_eq!(table.rows()[0].block_bytes, 16);
        assert_eq!(table.best().unwrap().block_bytes, 256);
    }
}
