use anyhow::{Context, bail};
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

mod chart;
mod config;
mod parser;
mod report;

use config::ChartConfig;
use parser::{
    DECRYPTION_SECTION, ENCRYPTION_SECTION, ReferenceTable, extract_section,
    parse_reference_text, parse_sweep_section,
};

const DEFAULT_SWEEP_INPUT: &str = "input.txt";
const DEFAULT_REFERENCE_INPUT: &str = "input-openssl.txt";

/// Render throughput charts from cipher benchmark logs.
#[derive(Parser, Debug)]
#[command(name = "cipher-bench-charts", version)]
struct Cli {
    /// Sweep log produced by the throughput test harness
    #[arg(long)]
    input: Option<PathBuf>,

    /// Summary output of the external cipher benchmark
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Directory the figures are written to
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Configuration file (default: charts.toml next to the sweep input)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render only the four-panel sweep figure
    #[arg(long, group = "sets")]
    sweep: bool,

    /// Render only the six-panel analysis figure
    #[arg(long, group = "sets")]
    advanced: bool,

    /// Render only the external benchmark comparison
    #[arg(long, group = "sets")]
    comparison: bool,

    /// Render every figure (the default)
    #[arg(long, group = "sets")]
    all: bool,

    /// Choose figures interactively
    #[arg(long)]
    menu: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartSet {
    Sweep,
    Advanced,
    Comparison,
}

const ALL_SETS: [ChartSet; 3] = [ChartSet::Sweep, ChartSet::Advanced, ChartSet::Comparison];

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("cipher_bench_charts"), LevelFilter::Debug)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let sets = selected_sets(cli);

    // Resolution order for paths: CLI flag, then config file, then default.
    let input_hint = cli
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SWEEP_INPUT));
    let file_config = load_config(cli, &input_hint)?;

    let input = cli
        .input
        .clone()
        .or(file_config.input)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SWEEP_INPUT));
    let reference_path = cli
        .reference
        .clone()
        .or(file_config.reference_input)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE_INPUT));
    let out_dir = cli
        .out_dir
        .clone()
        .or(file_config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("failed to read sweep log {}", input.display()))?;
    let enc = parse_sweep_section(extract_section(&raw, ENCRYPTION_SECTION));
    let dec = parse_sweep_section(extract_section(&raw, DECRYPTION_SECTION));
    if enc.is_empty() || dec.is_empty() {
        bail!(
            "no measurement rows found in {} (encryption: {}, decryption: {})",
            input.display(),
            enc.len(),
            dec.len()
        );
    }
    info!(
        "Loaded sweep data: encryption {} rows, decryption {} rows",
        enc.len(),
        dec.len()
    );

    let reference = load_reference(&reference_path);

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    for set in sets {
        match set {
            ChartSet::Sweep => {
                let out = out_dir.join(chart::SWEEP_CHART_FILE);
                chart::render_sweep_panels(&enc, &dec, &out)
                    .map_err(|e| anyhow::anyhow!("failed to render {}: {e}", out.display()))?;
                report_written(&out);
            }
            ChartSet::Advanced => {
                let out = out_dir.join(chart::ADVANCED_CHART_FILE);
                chart::render_advanced(&enc, &dec, &out)
                    .map_err(|e| anyhow::anyhow!("failed to render {}: {e}", out.display()))?;
                report_written(&out);
            }
            ChartSet::Comparison => match &reference {
                Some(reference) => {
                    let out = out_dir.join(chart::COMPARISON_CHART_FILE);
                    chart::render_comparison(&enc, &dec, reference, &out)
                        .map_err(|e| anyhow::anyhow!("failed to render {}: {e}", out.display()))?;
                    report_written(&out);
                }
                None => warn!(
                    "reference data unavailable; skipping {}",
                    chart::COMPARISON_CHART_FILE
                ),
            },
        }
    }

    report::print_summary(&enc, &dec, reference.as_ref());
    Ok(())
}

/// Load the configuration file if one applies.
///
/// An explicitly passed `--config` path must exist and parse; the derived
/// default location is used only when present and valid.
fn load_config(cli: &Cli, input_hint: &Path) -> anyhow::Result<ChartConfig> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| ChartConfig::config_path_from_input(input_hint));

    if !config_path.exists() {
        if cli.config.is_some() {
            bail!("config file not found: {}", config_path.display());
        }
        return Ok(ChartConfig::default());
    }

    match ChartConfig::load(&config_path) {
        Ok(config) => {
            info!("Loaded configuration from {}", config_path.display());
            Ok(config)
        }
        Err(e) if cli.config.is_some() => bail!("{e}"),
        Err(e) => {
            warn!("{e}; ignoring {}", config_path.display());
            Ok(ChartConfig::default())
        }
    }
}

/// Read the optional reference input. Absent or unparseable data degrades
/// to `None` so the comparison figure is skipped, never a failure.
fn load_reference(path: &Path) -> Option<ReferenceTable> {
    if !path.exists() {
        info!(
            "Reference input not found, comparison will be skipped: {}",
            path.display()
        );
        return None;
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read reference input {}: {}", path.display(), e);
            return None;
        }
    };

    let table = parse_reference_text(&text);
    if table.is_empty() {
        warn!("No reference rows parsed from {}", path.display());
        return None;
    }

    info!("Loaded reference data: {} points", table.len());
    Some(table)
}

fn selected_sets(cli: &Cli) -> Vec<ChartSet> {
    if cli.menu {
        return interactive_menu();
    }
    if cli.sweep {
        vec![ChartSet::Sweep]
    } else if cli.advanced {
        vec![ChartSet::Advanced]
    } else if cli.comparison {
        vec![ChartSet::Comparison]
    } else {
        ALL_SETS.to_vec()
    }
}

fn interactive_menu() -> Vec<ChartSet> {
    use std::io::Write;

    println!();
    println!("Which figures should be rendered?");
    println!("  1) Sweep panels only");
    println!("  2) Advanced analysis only");
    println!("  3) External benchmark comparison only");
    println!("  4) Everything");
    print!("> ");
    let _ = std::io::stdout().flush();

    let mut choice = String::new();
    if std::io::stdin().read_line(&mut choice).is_err() {
        return ALL_SETS.to_vec();
    }
    parse_menu_choice(choice.trim())
}

/// Map a menu answer to chart sets; anything unrecognized means everything.
fn parse_menu_choice(choice: &str) -> Vec<ChartSet> {
    match choice {
        "1" => vec![ChartSet::Sweep],
        "2" => vec![ChartSet::Advanced],
        "3" => vec![ChartSet::Comparison],
        _ => ALL_SETS.to_vec(),
    }
}

fn report_written(path: &Path) {
    if path.exists() {
        println!("[ok] saved {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(parse_menu_choice("1"), vec![ChartSet::Sweep]);
        assert_eq!(parse_menu_choice("2"), vec![ChartSet::Advanced]);
        assert_eq!(parse_menu_choice("3"), vec![ChartSet::Comparison]);
        assert_eq!(parse_menu_choice("4"), ALL_SETS.to_vec());
        assert_eq!(parse_menu_choice(""), ALL_SETS.to_vec());
        assert_eq!(parse_menu_choice("everything"), ALL_SETS.to_vec());
    }

    #[test]
    fn test_default_selection_is_all() {
        let cli = Cli::parse_from(["cipher-bench-charts"]);
        assert_eq!(selected_sets(&cli), ALL_SETS.to_vec());
    }

    #[test]
    fn test_single_set_flags() {
        let cli = Cli::parse_from(["cipher-bench-charts", "--sweep"]);
        assert_eq!(selected_sets(&cli), vec![ChartSet::Sweep]);

        let cli = Cli::parse_from(["cipher-bench-charts", "--comparison"]);
        assert_eq!(selected_sets(&cli), vec![ChartSet::Comparison]);
    }

    #[test]
    fn test_set_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["cipher-bench-charts", "--sweep", "--all"]).is_err());
    }

    #[test]
    fn test_run_fails_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "cipher-bench-charts",
            "--input",
            dir.path().join("missing.txt").to_str().unwrap(),
        ]);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_run_fails_on_empty_parse() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "no sections in this file\n").unwrap();

        let cli = Cli::parse_from(["cipher-bench-charts", "--input", input.to_str().unwrap()]);
        assert!(run(&cli).is_err());
    }
}
