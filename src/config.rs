//! Optional configuration file for chart generation.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up next to the sweep input.
pub const CONFIG_FILE_NAME: &str = "charts.toml";

/// Settings loadable from `charts.toml`. Every field is optional; command
/// line flags take precedence over the file, which takes precedence over the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ChartConfig {
    /// Path to the sweep log produced by the test harness
    pub input: Option<PathBuf>,
    /// Path to the external benchmark summary
    pub reference_input: Option<PathBuf>,
    /// Directory the figures are written to
    pub output_dir: Option<PathBuf>,
}

impl ChartConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the charts.toml file
    ///
    /// # Returns
    /// * `Ok(ChartConfig)` if the file was successfully loaded and parsed
    /// * `Err(String)` with a descriptive error message otherwise
    pub fn load(config_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Derive the config path from the sweep input path.
    ///
    /// Replaces the input filename with "charts.toml" in the same directory.
    pub fn config_path_from_input(input_path: &Path) -> PathBuf {
        input_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_kebab_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "input = \"results/input.txt\"\nreference-input = \"results/openssl.txt\"\noutput-dir = \"charts\""
        )
        .unwrap();

        let config = ChartConfig::load(&path).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("results/input.txt")));
        assert_eq!(
            config.reference_input,
            Some(PathBuf::from("results/openssl.txt"))
        );
        assert_eq!(config.output_dir, Some(PathBuf::from("charts")));
    }

    #[test]
    fn test_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "output-dir = \"out\"\n").unwrap();

        let config = ChartConfig::load(&path).unwrap();
        assert!(config.input.is_none());
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ChartConfig::load(Path::new("/nonexistent/charts.toml")).is_err());
    }

    #[test]
    fn test_config_path_from_input() {
        assert_eq!(
            ChartConfig::config_path_from_input(Path::new("results/input.txt")),
            PathBuf::from("results/charts.toml")
        );
        assert_eq!(
            ChartConfig::config_path_from_input(Path::new("input.txt")),
            PathBuf::from("charts.toml")
        );
    }
}
