//! Report generator
//!
//! Runs the step catalog over a derived dataset. Each step is gated on the
//! presence of its columns; skipped steps are recorded and, where the step
//! defines one (or `skip_notices` is on), reported as a note.

use crate::artifact::{Artifact, ArtifactBody, Section};
use crate::config::ReportConfig;
use crate::derive::DerivedDataset;
use crate::steps::{Step, StepContext, CATALOG};
use serde::Serialize;

/// A step that did not run because columns were missing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedStep {
    pub step: String,
    pub section: Section,
    pub missing: Vec<String>,
}

/// Everything a run produced, in catalog order
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub artifacts: Vec<Artifact>,
    pub skipped: Vec<SkippedStep>,
}

impl Report {
    /// First artifact emitted by the given step
    pub fn artifact(&self, step: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.step == step)
    }

    pub fn was_skipped(&self, step: &str) -> bool {
        self.skipped.iter().any(|s| s.step == step)
    }

    /// Artifacts that carry a chart specification
    pub fn charts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(|a| a.body.as_chart().is_some())
    }

    /// Artifacts of one section
    pub fn section(&self, section: Section) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(move |a| a.section == section)
    }
}

/// Runs analysis steps in a fixed order
pub struct ReportGenerator {
    config: ReportConfig,
    steps: Vec<Step>,
}

impl ReportGenerator {
    /// Create a generator over the built-in catalog
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            steps: CATALOG.to_vec(),
        }
    }

    /// Create a generator over a custom list of steps
    pub fn with_steps(config: ReportConfig, steps: Vec<Step>) -> Self {
        Self { config, steps }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step against the dataset
    pub fn run(&self, dataset: &DerivedDataset) -> Report {
        log::info!(
            "Running {} analysis steps over {} rows x {} columns",
            self.steps.len(),
            dataset.row_count(),
            dataset.column_count()
        );

        let ctx = StepContext::new(dataset, &self.config);
        let mut report = Report::default();

        for step in &self.steps {
            if !self.config.should_run_section(step.section) {
                log::trace!("Section {} filtered out, not running {}", step.section, step.id);
                continue;
            }

            if !step.requires.is_satisfied(dataset) {
                let missing = step.requires.missing(dataset);
                log::debug!("Skipping step {}: missing {}", step.id, missing.join(", "));

                let note = match step.skip_note_for(dataset) {
                    Some(note) => Some(note.to_string()),
                    None if self.config.skip_notices => Some(format!(
                        "Skipped '{}': missing column(s) {}",
                        step.id,
                        missing.join(", ")
                    )),
                    None => None,
                };
                if let Some(text) = note {
                    report
                        .artifacts
                        .push(Artifact::new(step.id, step.section, ArtifactBody::Note { text }));
                }

                report.skipped.push(SkippedStep {
                    step: step.id.to_string(),
                    section: step.section,
                    missing,
                });
                continue;
            }

            match step.execute(&ctx) {
                Some(body) => {
                    log::debug!("Step {} produced an artifact", step.id);
                    report.artifacts.push(Artifact::new(step.id, step.section, body));
                }
                None => log::debug!("Step {} had no data to report", step.id),
            }
        }

        log::info!(
            "Report complete: {} artifacts, {} steps skipped",
            report.artifacts.len(),
            report.skipped.len()
        );
        report
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}
