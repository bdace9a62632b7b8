//! Chart rendering: tables in, PNG files out.
//!
//! Three figure sets are available:
//! - Sweep: four grouped line panels (`library_performance.png`)
//! - Advanced: the four panels plus bar and scaling analysis
//!   (`advanced_performance_analysis.png`)
//! - Comparison: best-per-chunk curves against the external benchmark
//!   (`openssl_comparison.png`)
//!
//! Rendering an empty table is not an error: the figure is skipped with a
//! warning and no file is written.

pub mod advanced;
pub mod comparison;
pub mod palette;
pub mod panel;
pub mod sweep_panels;

pub use advanced::{ADVANCED_CHART_FILE, render_advanced};
pub use comparison::{COMPARISON_CHART_FILE, render_comparison};
pub use sweep_panels::{SWEEP_CHART_FILE, render_sweep_panels};

/// Result alias for rendering functions.
pub type ChartResult = Result<(), Box<dyn std::error::Error>>;
