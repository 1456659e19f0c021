//! Configuration loading and parsing

use accident_report::{CsvOptions, ReportConfig, Section};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: ReportConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub file: Option<PathBuf>,
    #[serde(flatten)]
    pub csv: CsvOptions,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub delimiter: Option<char>,
    pub top_k: Option<usize>,
    pub sections: Vec<Section>,
    pub skip_notices: bool,
}

impl AppConfig {
    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(input) = overrides.input {
            self.input.file = Some(input);
        }
        if let Some(dir) = overrides.output_dir {
            self.output.output_dir = Some(dir);
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(delimiter) = overrides.delimiter {
            self.input.csv = self.input.csv.with_delimiter(delimiter);
        }
        if let Some(top_k) = overrides.top_k {
            self.analysis = self.analysis.with_top_k(top_k);
        }
        if !overrides.sections.is_empty() {
            self.analysis = self.analysis.with_sections(overrides.sections);
        }
        if overrides.skip_notices {
            self.analysis = self.analysis.with_skip_notices(true);
        }
        self
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            file = "road-accident-data.csv"
            delimiter = ";"

            [output]
            format = "json"
            output_dir = "report"

            [analysis]
            top_k = 5
            sections = ["severity", "temporal_patterns"]
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.file, Some(PathBuf::from("road-accident-data.csv")));
        assert_eq!(config.input.csv.delimiter, ';');
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.analysis.top_k, 5);
        assert_eq!(config.analysis.histogram_bins, 20);
        assert!(config.analysis.should_run_section(Section::TemporalPatterns));
        assert!(!config.analysis.should_run_section(Section::Geographic));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.input.file.is_none());
        assert_eq!(config.input.csv.delimiter, ',');
        assert_eq!(config.output.format, OutputFormat::Txt);
        assert_eq!(config.analysis.top_k, 10);
    }

    #[test]
    fn test_overrides_win() {
        let config: AppConfig = toml::from_str("[input]\nfile = \"a.csv\"\n[analysis]\ntop_k = 3\n").unwrap();
        let config = config.with_overrides(Overrides {
            input: Some(PathBuf::from("b.csv")),
            top_k: Some(7),
            sections: vec![Section::Geographic],
            ..Default::default()
        });
        assert_eq!(config.input.file, Some(PathBuf::from("b.csv")));
        assert_eq!(config.analysis.top_k, 7);
        assert_eq!(config.analysis.sections, Some(vec![Section::Geographic]));
        assert!(!config.analysis.skip_notices);
    }

    #[test]
    fn test_zero_counts_are_raised_to_one() {
        let config: AppConfig = toml::from_str("[analysis]\ntop_k = 0\nhistogram_bins = 0\n").unwrap();
        assert_eq!(config.analysis.top_k, 1);
        assert_eq!(config.analysis.histogram_bins, 1);
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config(Path::new("no/such/config.toml")).is_err());
    }
}
