//! Report configuration types
//!
//! The library only needs a handful of knobs: how many categories a top-K
//! chart keeps, how many bins a histogram has, and which sections to run.
//! Everything about where the report goes lives in the application layer.

use crate::artifact::Section;
use serde::{Deserialize, Deserializer, Serialize};

/// Configuration for the report generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of categories kept by "top K" frequency charts
    #[serde(default = "default_top_k", deserialize_with = "at_least_one")]
    pub top_k: usize,

    /// Number of equal-width bins used by histograms
    #[serde(default = "default_histogram_bins", deserialize_with = "at_least_one")]
    pub histogram_bins: usize,

    /// Emit a notice artifact for every step skipped due to missing columns
    #[serde(default)]
    pub skip_notices: bool,

    /// Optional: only run steps from these sections
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
}

fn default_top_k() -> usize {
    10
}

fn default_histogram_bins() -> usize {
    20
}

/// Counts read from a file get the same floor as the builder methods
fn at_least_one<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(usize::deserialize(deserializer)?.max(1))
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            histogram_bins: default_histogram_bins(),
            skip_notices: false,
            sections: None,
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the top-K truncation (at least 1)
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// Builder method: set the histogram bin count (at least 1)
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins.max(1);
        self
    }

    /// Builder method: enable or disable skip notices
    pub fn with_skip_notices(mut self, enabled: bool) -> Self {
        self.skip_notices = enabled;
        self
    }

    /// Builder method: restrict the run to the given sections
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = Some(sections);
        self
    }

    /// Check if steps of a section should run
    pub fn should_run_section(&self, section: Section) -> bool {
        match &self.sections {
            Some(sections) => sections.contains(&section),
            None => true,
        }
    }
}

/// Options for reading delimited input files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter (default: `,`)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_delimiter() -> char {
    ','
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl CsvOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}
