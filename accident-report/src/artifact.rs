//! Report artifacts
//!
//! Every analysis step emits at most one artifact: a scalar statistic, a
//! small table, a note, or a chart specification for the rendering
//! collaborator. Artifacts carry their data, so a renderer never needs the
//! dataset itself.

use crate::stats::{BoxSummary, CorrelationMatrix, Frequency, GroupedCounts, Histogram};
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Report themes, in the order they appear in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    Temporal,
    Geographic,
    Severity,
    Demographic,
    Environmental,
    VehicleDriver,
    TemporalPatterns,
    ContributingFactors,
    InjuryFatality,
    Comparative,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::Overview,
        Section::Temporal,
        Section::Geographic,
        Section::Severity,
        Section::Demographic,
        Section::Environmental,
        Section::VehicleDriver,
        Section::TemporalPatterns,
        Section::ContributingFactors,
        Section::InjuryFatality,
        Section::Comparative,
    ];

    /// Banner text printed above the section
    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "0. Dataset Overview",
            Section::Temporal => "1. Frequency of Accidents Over Time",
            Section::Geographic => "2. Geographical Distribution",
            Section::Severity => "3. Accident Severity Analysis",
            Section::Demographic => "4. Demographic Insights",
            Section::Environmental => "5. Environmental and Road Conditions",
            Section::VehicleDriver => "6. Vehicle and Driver Information",
            Section::TemporalPatterns => "7. Temporal Patterns",
            Section::ContributingFactors => "8. Contributing Factors",
            Section::InjuryFatality => "9. Injury and Fatality Analysis",
            Section::Comparative => "10. Comparative Analysis",
        }
    }

    /// Identifier used in configuration files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Temporal => "temporal",
            Section::Geographic => "geographic",
            Section::Severity => "severity",
            Section::Demographic => "demographic",
            Section::Environmental => "environmental",
            Section::VehicleDriver => "vehicle_driver",
            Section::TemporalPatterns => "temporal_patterns",
            Section::ContributingFactors => "contributing_factors",
            Section::InjuryFatality => "injury_fatality",
            Section::Comparative => "comparative",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.key() == wanted)
            .ok_or_else(|| format!("unknown section '{}'", s))
    }
}

/// Kind of chart requested from the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Count,
    Line,
    Scatter,
    Box,
    Histogram,
    Heatmap,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Count => write!(f, "count"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::Box => write!(f, "box"),
            ChartKind::Histogram => write!(f, "histogram"),
            ChartKind::Heatmap => write!(f, "heatmap"),
        }
    }
}

/// A point of a scatter chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<Value>,
}

/// Data bound to a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    Frequencies { entries: Vec<Frequency> },
    GroupedCounts(GroupedCounts),
    Distributions { summaries: Vec<BoxSummary> },
    Histogram(Histogram),
    Correlation(CorrelationMatrix),
    Points { points: Vec<ScatterPoint> },
}

/// Chart specification handed to the rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<String>,
    pub xlabel: String,
    pub ylabel: String,
    /// Explicit axis order, when the natural order is not by count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>, x: impl Into<String>, data: ChartData) -> Self {
        let x = x.into();
        Self {
            kind,
            title: title.into(),
            xlabel: x.clone(),
            ylabel: String::from("Number of Accidents"),
            x,
            y: None,
            hue: None,
            order: None,
            top_k: None,
            data,
        }
    }

    pub fn with_y(mut self, y: impl Into<String>) -> Self {
        let y = y.into();
        self.ylabel = y.clone();
        self.y = Some(y);
        self
    }

    pub fn with_hue(mut self, hue: impl Into<String>) -> Self {
        self.hue = Some(hue.into());
        self
    }

    pub fn with_labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self.ylabel = ylabel.into();
        self
    }

    pub fn with_order(mut self, order: Vec<String>) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }
}

/// Payload of an artifact
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArtifactBody {
    /// A scalar; `None` means the value is undefined (e.g. an empty denominator)
    Statistic {
        label: String,
        value: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
    Table {
        title: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Chart(ChartSpec),
    Note { text: String },
}

impl ArtifactBody {
    pub fn as_chart(&self) -> Option<&ChartSpec> {
        match self {
            ArtifactBody::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn statistic_value(&self) -> Option<f64> {
        match self {
            ArtifactBody::Statistic { value, .. } => *value,
            _ => None,
        }
    }
}

/// Output of one analysis step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub step: String,
    pub section: Section,
    pub body: ArtifactBody,
}

impl Artifact {
    pub fn new(step: impl Into<String>, section: Section, body: ArtifactBody) -> Self {
        Self {
            step: step.into(),
            section,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parsing() {
        assert_eq!("severity".parse::<Section>(), Ok(Section::Severity));
        assert_eq!("Vehicle-Driver".parse::<Section>(), Ok(Section::VehicleDriver));
        assert!("weather".parse::<Section>().is_err());
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_chart_spec_builder() {
        let chart = ChartSpec::new(
            ChartKind::Box,
            "Age Distribution by Gender",
            "Gender",
            ChartData::Distributions { summaries: vec![] },
        )
        .with_y("Age");
        assert_eq!(chart.xlabel, "Gender");
        assert_eq!(chart.ylabel, "Age");
        assert_eq!(chart.y.as_deref(), Some("Age"));
        assert!(chart.hue.is_none());
    }

    #[test]
    fn test_artifact_serialization() {
        let artifact = Artifact::new(
            "fatal_percentage",
            Section::Severity,
            ArtifactBody::Statistic {
                label: "Percentage of Fatal Accidents".into(),
                value: None,
                unit: Some("%".into()),
            },
        );
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["section"], "severity");
        assert_eq!(json["body"]["type"], "statistic");
        assert!(json["body"]["value"].is_null());
    }
}
