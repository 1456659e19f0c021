//! Descriptive statistics over dataset columns
//!
//! Every function here is pure and works on a column's cells. `Missing`
//! cells are dropped before counting; numeric functions only look at
//! `Integer` and `Float` cells.
//!
//! Frequency tables break count ties by first-seen order. Sorting is stable,
//! so two categories with the same count keep the order in which they first
//! appear in the column.

use crate::types::Value;
use serde::Serialize;
use std::collections::HashMap;

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frequency {
    pub value: Value,
    pub count: usize,
}

impl Frequency {
    pub fn new(value: Value, count: usize) -> Self {
        Self { value, count }
    }
}

/// Counts of a categorical column broken down by a second (hue) column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedCounts {
    pub categories: Vec<Value>,
    pub hues: Vec<Value>,
    /// `counts[i][j]` is the number of rows with `categories[i]` and `hues[j]`
    pub counts: Vec<Vec<usize>>,
}

impl GroupedCounts {
    pub fn get(&self, category: &Value, hue: &Value) -> usize {
        let i = self.categories.iter().position(|c| c == category);
        let j = self.hues.iter().position(|h| h == hue);
        match (i, j) {
            (Some(i), Some(j)) => self.counts[i][j],
            _ => 0,
        }
    }
}

/// Box-plot equivalent summary of a numeric column within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub category: Value,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Equal-width histogram; `edges` has one more entry than `counts`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Pairwise Pearson correlations; `None` where undefined
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub fields: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.fields.iter().position(|f| f == a)?;
        let j = self.fields.iter().position(|f| f == b)?;
        self.values[i][j]
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(v) => Some(*v as f64),
        Value::Float(v) if v.is_finite() => Some(*v),
        _ => None,
    }
}

/// Counts in first-seen order, missing cells excluded
fn first_seen_counts<'a>(values: impl IntoIterator<Item = &'a Value>) -> Vec<Frequency> {
    let mut index: HashMap<&Value, usize> = HashMap::new();
    let mut table: Vec<Frequency> = Vec::new();
    for value in values.into_iter().filter(|v| !v.is_missing()) {
        match index.get(value) {
            Some(&i) => table[i].count += 1,
            None => {
                index.insert(value, table.len());
                table.push(Frequency::new(value.clone(), 1));
            }
        }
    }
    table
}

/// Frequency of each distinct value, most frequent first
pub fn value_counts(values: &[Value]) -> Vec<Frequency> {
    let mut table = first_seen_counts(values);
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// Distinct values in axis order: ascending for all-numeric columns,
/// first-seen otherwise
pub fn categorical_order<'a>(values: impl IntoIterator<Item = &'a Value>) -> Vec<Value> {
    let mut order: Vec<Value> = first_seen_counts(values)
        .into_iter()
        .map(|f| f.value)
        .collect();
    if !order.is_empty() && order.iter().all(Value::is_numeric) {
        order.sort();
    }
    order
}

/// Counts in the natural axis order of the column
pub fn category_counts(values: &[Value]) -> Vec<Frequency> {
    let order = categorical_order(values);
    counts_in_order(values, &order)
}

/// Counts for an explicit order; zero counts are kept and values outside
/// the order are ignored
pub fn counts_in_order(values: &[Value], order: &[Value]) -> Vec<Frequency> {
    let counts = first_seen_counts(values);
    order
        .iter()
        .map(|value| {
            let count = counts
                .iter()
                .find(|f| &f.value == value)
                .map(|f| f.count)
                .unwrap_or(0);
            Frequency::new(value.clone(), count)
        })
        .collect()
}

/// Re-sort a frequency table by value, ascending
pub fn sort_by_value(mut table: Vec<Frequency>) -> Vec<Frequency> {
    table.sort_by(|a, b| a.value.cmp(&b.value));
    table
}

/// Keep only the first `k` rows of a frequency table
pub fn top_k(mut table: Vec<Frequency>, k: usize) -> Vec<Frequency> {
    table.truncate(k);
    table
}

/// Number of cells equal to the given text
pub fn count_text(values: &[Value], target: &str) -> usize {
    values.iter().filter(|v| v.as_str() == Some(target)).count()
}

/// Number of non-missing cells
pub fn count_present(values: &[Value]) -> usize {
    values.iter().filter(|v| !v.is_missing()).count()
}

/// `part / total * 100`, undefined for an empty total
pub fn percentage(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64 * 100.0)
    }
}

/// Grouped counts of `x` against `hue`; rows missing either side are dropped
pub fn crosstab(x: &[Value], hue: &[Value]) -> GroupedCounts {
    let pairs: Vec<(&Value, &Value)> = x
        .iter()
        .zip(hue)
        .filter(|(a, b)| !a.is_missing() && !b.is_missing())
        .collect();

    let categories = categorical_order(pairs.iter().map(|(a, _)| *a));
    let hues = categorical_order(pairs.iter().map(|(_, b)| *b));
    let mut counts = vec![vec![0usize; hues.len()]; categories.len()];

    for (a, b) in pairs {
        let i = categories.iter().position(|c| c == a);
        let j = hues.iter().position(|h| h == b);
        if let (Some(i), Some(j)) = (i, j) {
            counts[i][j] += 1;
        }
    }

    GroupedCounts {
        categories,
        hues,
        counts,
    }
}

/// Linear-interpolated quantile of sorted samples
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Five-number summary of a sample, `None` when empty
pub fn five_number_summary(category: Value, samples: &[f64]) -> Option<BoxSummary> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(BoxSummary {
        category,
        count: sorted.len(),
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Distribution of numeric `y` within each category of `x`
///
/// Categories are in axis order; categories with no numeric samples are
/// omitted.
pub fn grouped_distributions(x: &[Value], y: &[Value]) -> Vec<BoxSummary> {
    let pairs: Vec<(&Value, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, _)| !a.is_missing())
        .filter_map(|(a, b)| numeric(b).map(|n| (a, n)))
        .collect();

    categorical_order(pairs.iter().map(|(a, _)| *a))
        .into_iter()
        .filter_map(|category| {
            let samples: Vec<f64> = pairs
                .iter()
                .filter(|(a, _)| **a == category)
                .map(|(_, n)| *n)
                .collect();
            five_number_summary(category, &samples)
        })
        .collect()
}

/// Equal-width histogram over the numeric cells, `None` when there are none
///
/// The last bin is closed on the right. A zero-width range is widened by
/// half a unit on each side.
pub fn histogram(values: &[Value], bins: usize) -> Option<Histogram> {
    let samples: Vec<f64> = values.iter().filter_map(numeric).collect();
    if samples.is_empty() || bins == 0 {
        return None;
    }

    let mut lo = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for s in &samples {
        let idx = (((s - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
    edges.push(hi);

    Some(Histogram { edges, counts })
}

/// Pearson correlation over rows where both cells are numeric
pub fn pearson(xs: &[Value], ys: &[Value]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(a, b)| Some((numeric(a)?, numeric(b)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Pairwise correlation matrix of the given named columns
pub fn correlation_matrix(columns: &[(&str, &[Value])]) -> CorrelationMatrix {
    let values = columns
        .iter()
        .enumerate()
        .map(|(i, (_, a))| {
            columns
                .iter()
                .enumerate()
                .map(|(j, (_, b))| {
                    let r = pearson(a, b);
                    if i == j {
                        r.map(|_| 1.0)
                    } else {
                        r
                    }
                })
                .collect()
        })
        .collect();

    CorrelationMatrix {
        fields: columns.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    }
}
