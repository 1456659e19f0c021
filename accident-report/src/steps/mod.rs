//! Analysis step descriptors
//!
//! A step is a plain descriptor: the columns it needs, the section it
//! belongs to, and a pure function from the dataset to at most one artifact
//! body. The generator checks requirements against the dataset schema before
//! calling the function, so step functions can assume their columns exist.

use crate::artifact::{ArtifactBody, Section};
use crate::config::ReportConfig;
use crate::dataset::Dataset;
use crate::derive::DerivedDataset;
use crate::types::Value;

pub mod catalog;
mod charts;

pub use catalog::CATALOG;

/// Columns a step needs before it can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    /// Every one of these columns must be present
    pub all_of: &'static [&'static str],
    /// At least one of these must be present (ignored when empty)
    pub any_of: &'static [&'static str],
}

impl Requirement {
    pub const NONE: Requirement = Requirement {
        all_of: &[],
        any_of: &[],
    };

    pub const fn all(all_of: &'static [&'static str]) -> Self {
        Self { all_of, any_of: &[] }
    }

    pub const fn all_and_any(all_of: &'static [&'static str], any_of: &'static [&'static str]) -> Self {
        Self { all_of, any_of }
    }

    fn any_satisfied(&self, dataset: &Dataset) -> bool {
        self.any_of.is_empty() || self.any_of.iter().any(|c| dataset.has_column(c))
    }

    /// Human-readable list of what is missing; empty when satisfied
    pub fn missing(&self, dataset: &Dataset) -> Vec<String> {
        let mut missing: Vec<String> = self
            .all_of
            .iter()
            .filter(|c| !dataset.has_column(c))
            .map(|c| c.to_string())
            .collect();
        if !self.any_satisfied(dataset) {
            missing.push(format!("one of [{}]", self.any_of.join(", ")));
        }
        missing
    }

    pub fn is_satisfied(&self, dataset: &Dataset) -> bool {
        self.all_of.iter().all(|c| dataset.has_column(c)) && self.any_satisfied(dataset)
    }
}

/// What a step function sees
pub struct StepContext<'a> {
    pub dataset: &'a DerivedDataset,
    pub config: &'a ReportConfig,
}

impl<'a> StepContext<'a> {
    pub fn new(dataset: &'a DerivedDataset, config: &'a ReportConfig) -> Self {
        Self { dataset, config }
    }

    /// Cells of a column; empty when absent
    pub fn values(&self, column: &str) -> &'a [Value] {
        self.dataset.values(column).unwrap_or_default()
    }

    pub fn has(&self, column: &str) -> bool {
        self.dataset.has_column(column)
    }
}

pub type StepFn = fn(&StepContext<'_>) -> Option<ArtifactBody>;

/// One column-gated analysis unit
#[derive(Clone, Copy)]
pub struct Step {
    pub id: &'static str,
    pub section: Section,
    pub requires: Requirement,
    /// Printed instead of the artifact when the step is skipped while its
    /// any-of group is satisfied
    pub skip_note: Option<&'static str>,
    pub run: StepFn,
}

impl Step {
    /// Run the step; requirements are not re-checked here
    pub fn execute(&self, ctx: &StepContext<'_>) -> Option<ArtifactBody> {
        (self.run)(ctx)
    }

    /// Whether a skip note applies for this dataset
    pub fn skip_note_for(&self, dataset: &Dataset) -> Option<&'static str> {
        self.skip_note
            .filter(|_| self.requires.any_satisfied(dataset))
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("id", &self.id)
            .field("section", &self.section)
            .field("requires", &self.requires)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns as col;

    fn dataset(headers: &[&str]) -> Dataset {
        let row: Vec<&str> = headers.iter().map(|_| "1").collect();
        Dataset::from_text_rows(headers, vec![row]).unwrap()
    }

    #[test]
    fn test_requirement_all_of() {
        let req = Requirement::all(&[col::LATITUDE, col::LONGITUDE]);
        assert!(req.is_satisfied(&dataset(&["Latitude", "Longitude"])));

        let partial = dataset(&["Latitude"]);
        assert!(!req.is_satisfied(&partial));
        assert_eq!(req.missing(&partial), vec!["Longitude".to_string()]);
    }

    #[test]
    fn test_requirement_any_of() {
        let req = Requirement::all_and_any(&[col::ROAD_USER], &[col::INJURY_COUNT, col::FATALITY_COUNT]);
        assert!(req.is_satisfied(&dataset(&["Road_User", "Fatality_Count"])));
        assert!(!req.is_satisfied(&dataset(&["Road_User"])));
        assert_eq!(
            req.missing(&dataset(&["Injury_Count"])),
            vec!["Road_User".to_string()]
        );
        assert_eq!(
            req.missing(&dataset(&["Road_User"])),
            vec!["one of [Injury_Count, Fatality_Count]".to_string()]
        );
    }

    #[test]
    fn test_no_requirements() {
        assert!(Requirement::NONE.is_satisfied(&Dataset::default()));
        assert!(Requirement::NONE.missing(&Dataset::default()).is_empty());
    }
}
