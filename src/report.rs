//! Console summary printed after rendering.

use chrono::Local;

use crate::parser::{ReferenceTable, SweepTable};

/// Print the throughput summary for both sweep tables and, when available,
/// the external reference data.
pub fn print_summary(enc: &SweepTable, dec: &SweepTable, reference: Option<&ReferenceTable>) {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    println!();
    println!("{}", "=".repeat(60));
    println!("THROUGHPUT SUMMARY ({stamp})");
    println!("{}", "=".repeat(60));

    print_operation_summary("Encryption", enc);
    print_operation_summary("Decryption", dec);

    if let (Some(enc_mean), Some(dec_mean)) = (enc.mean_throughput(), dec.mean_throughput()) {
        if enc_mean > 0.0 {
            let delta = (dec_mean / enc_mean - 1.0) * 100.0;
            println!();
            println!("Decryption mean is {delta:+.1}% vs encryption");
        }
    }

    if let Some(best) = reference.and_then(|table| table.best()) {
        println!();
        println!(
            "{}: best {:.1} MB/s at {} bytes buffer",
            best.label, best.throughput_mbps, best.block_bytes
        );
    }

    println!("{}", "=".repeat(60));
}

fn print_operation_summary(name: &str, table: &SweepTable) {
    println!();
    println!("{name}: {} rows", table.len());

    let Some(best) = table.best() else {
        return;
    };
    println!(
        "  best:        {:.1} MB/s ({} threads, {} MB chunks)",
        best.throughput_mbps, best.threads, best.chunk_mb
    );

    if let (Some(mean), Some(median), Some(min), Some(max)) = (
        table.mean_throughput(),
        table.median_throughput(),
        table.min_throughput(),
        table.max_throughput(),
    ) {
        println!("  mean/median: {mean:.1} / {median:.1} MB/s");
        println!("  min/max:     {min:.1} / {max:.1} MB/s");
    }

    let by_chunk = table.mean_per_chunk();
    let best_chunk = by_chunk
        .iter()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let worst_chunk = by_chunk
        .iter()
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    if let (Some(&(best_mb, best_avg)), Some(&(worst_mb, worst_avg))) = (best_chunk, worst_chunk) {
        println!("  best chunk:  {best_mb} MB (avg {best_avg:.1} MB/s)");
        println!("  worst chunk: {worst_mb} MB (avg {worst_avg:.1} MB/s)");
    }
}
