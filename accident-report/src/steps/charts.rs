//! Chart constructors shared by the catalog
//!
//! Each returns `None` when there is nothing to draw, which the generator
//! treats as "no artifact" rather than an error.

use crate::artifact::{ChartData, ChartKind, ChartSpec};
use crate::stats::{BoxSummary, Frequency, GroupedCounts, Histogram};

pub(super) const COUNT_LABEL: &str = "Number of Accidents";

/// Axis labels of a frequency table, in table order
pub(super) fn labels(entries: &[Frequency]) -> Vec<String> {
    entries.iter().map(|f| f.value.to_string()).collect()
}

pub(super) fn frequencies(
    kind: ChartKind,
    title: impl Into<String>,
    x: &str,
    entries: Vec<Frequency>,
) -> Option<ChartSpec> {
    if entries.iter().all(|f| f.count == 0) {
        return None;
    }
    Some(ChartSpec::new(kind, title, x, ChartData::Frequencies { entries }))
}

pub(super) fn grouped(title: impl Into<String>, x: &str, hue: &str, counts: GroupedCounts) -> Option<ChartSpec> {
    if counts.categories.is_empty() {
        return None;
    }
    Some(
        ChartSpec::new(ChartKind::Count, title, x, ChartData::GroupedCounts(counts))
            .with_hue(hue)
            .with_labels(x, COUNT_LABEL),
    )
}

pub(super) fn distributions(
    title: impl Into<String>,
    x: &str,
    y: &str,
    summaries: Vec<BoxSummary>,
) -> Option<ChartSpec> {
    if summaries.is_empty() {
        return None;
    }
    Some(ChartSpec::new(ChartKind::Box, title, x, ChartData::Distributions { summaries }).with_y(y))
}

pub(super) fn histogram(title: impl Into<String>, x: &str, histogram: Option<Histogram>) -> Option<ChartSpec> {
    let histogram = histogram?;
    Some(
        ChartSpec::new(ChartKind::Histogram, title, x, ChartData::Histogram(histogram))
            .with_labels(x, "Frequency"),
    )
}
