//! Road Accident Report Library
//!
//! A stateless, reusable library for exploratory analysis of tabular
//! accident records.
//!
//! # Architecture
//!
//! - Loads a delimited file into a dynamically-typed, column-oriented dataset
//! - Runs a single derivation pass (Year, Month, DayOfWeek, Hour,
//!   Severity_Numeric, Age_Group, Is_Weekend)
//! - Executes a fixed catalog of analysis steps, each gated on the columns it
//!   needs, and collects their artifacts (statistics, tables, notes, chart
//!   specifications)
//!
//! The library does NOT:
//! - Draw charts (see [`ChartRenderer`])
//! - Print anything
//! - Read configuration files
//!
//! All of that is in the application layer (accident-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use accident_report::{derive, load_csv, CsvOptions, ReportConfig, ReportGenerator};
//! use std::path::Path;
//!
//! let dataset = load_csv(Path::new("road-accident-data.csv"), &CsvOptions::default()).unwrap();
//! let dataset = derive(dataset).unwrap();
//!
//! let generator = ReportGenerator::new(ReportConfig::new().with_top_k(5));
//! let report = generator.run(&dataset);
//!
//! for artifact in &report.artifacts {
//!     println!("{} / {}", artifact.section, artifact.step);
//! }
//! ```

// Public modules
pub mod artifact;
pub mod columns;
pub mod config;
pub mod dataset;
pub mod derive;
pub mod generator;
pub mod loader;
pub mod render;
pub mod stats;
pub mod steps;
pub mod types;

// Re-export main types for convenience
pub use artifact::{Artifact, ArtifactBody, ChartData, ChartKind, ChartSpec, ScatterPoint, Section};
pub use config::{CsvOptions, ReportConfig};
pub use dataset::{Column, Dataset};
pub use derive::{derive, DerivedDataset};
pub use generator::{Report, ReportGenerator, SkippedStep};
pub use loader::{load_csv, read_csv};
pub use render::{render_charts, ChartRenderer};
pub use types::{ReportError, Result, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: an empty dataset still produces the unconditional steps
        let dataset = derive(Dataset::default()).unwrap();
        let report = ReportGenerator::default().run(&dataset);
        assert_eq!(
            report
                .artifact("total_accidents")
                .and_then(|a| a.body.statistic_value()),
            Some(0.0)
        );
        assert!(report.artifact("external_comparison_note").is_some());
    }
}
