//! Derivation pass
//!
//! Adds the temporal, ordinal and bucketed columns the analysis steps rely
//! on. The pass consumes the raw [`Dataset`] and hands back a
//! [`DerivedDataset`], which is the only thing the report generator accepts.
//! Each derived column is gated on its own source column; when the source is
//! absent the derived column is simply not added.

use crate::columns as col;
use crate::dataset::{Column, Dataset};
use crate::types::{Result, Value};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::ops::Deref;

/// Weekday names in calendar order, Monday first
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Age group labels in bin order
pub const AGE_GROUPS: [&str; 5] = ["0-18", "19-30", "31-45", "46-60", "60+"];

/// Lower edges of the age bins; each bin is closed on the left
const AGE_BIN_EDGES: [f64; 5] = [0.0, 18.0, 30.0, 45.0, 60.0];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// A dataset that has been through the derivation pass
#[derive(Debug, Clone)]
pub struct DerivedDataset {
    dataset: Dataset,
    derived: Vec<&'static str>,
}

impl DerivedDataset {
    /// Names of the columns added (or re-typed) by the derivation pass
    pub fn derived_columns(&self) -> &[&'static str] {
        &self.derived
    }

    pub fn into_inner(self) -> Dataset {
        self.dataset
    }
}

impl Deref for DerivedDataset {
    type Target = Dataset;

    fn deref(&self) -> &Dataset {
        &self.dataset
    }
}

/// Parse a calendar date; unparseable values yield `None`
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let s = match value {
        Value::Date(d) => return Some(*d),
        Value::Text(s) => s.trim(),
        _ => return None,
    };
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Hour of day from an `HH:MM` time; anything else yields `None`
pub fn parse_hour(value: &Value) -> Option<u32> {
    let s = value.as_str()?.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .ok()
        .map(|t| t.hour())
}

/// Ordinal severity: `Minor` 1, `Serious` 2, `Fatal` 3
pub fn severity_numeric(value: &Value) -> Option<i64> {
    match value.as_str()? {
        "Minor" => Some(1),
        "Serious" => Some(2),
        "Fatal" => Some(3),
        _ => None,
    }
}

/// Age bucket label; negative or non-numeric ages yield `None`
pub fn age_group(value: &Value) -> Option<&'static str> {
    let age = match value {
        Value::Integer(v) => *v as f64,
        Value::Float(v) if v.is_finite() => *v,
        _ => return None,
    };
    if age < 0.0 {
        return None;
    }
    AGE_BIN_EDGES
        .iter()
        .rposition(|edge| age >= *edge)
        .map(|idx| AGE_GROUPS[idx])
}

/// Weekend flag from a weekday name; missing stays missing
pub fn is_weekend(value: &Value) -> Option<bool> {
    let day = value.as_str()?;
    Some(day == "Saturday" || day == "Sunday")
}

fn weekday_name(date: &NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

fn derived_column<T, F>(name: &str, source: &[T], f: F) -> Column
where
    F: Fn(&T) -> Option<Value>,
{
    Column::new(
        name,
        source.iter().map(|v| f(v).unwrap_or(Value::Missing)).collect(),
    )
}

/// Run the derivation pass over a freshly loaded dataset
pub fn derive(dataset: Dataset) -> Result<DerivedDataset> {
    let mut ds = dataset;
    let mut derived = Vec::new();

    let dates: Option<Vec<Option<NaiveDate>>> = ds
        .values(col::DATE)
        .map(|raw| raw.iter().map(parse_date).collect());
    if let Some(dates) = dates {
        let invalid = dates
            .iter()
            .zip(ds.values(col::DATE).unwrap_or_default())
            .filter(|(parsed, raw)| parsed.is_none() && !raw.is_missing())
            .count();
        if invalid > 0 {
            log::warn!("{} unparseable {} values treated as missing", invalid, col::DATE);
        }

        ds = ds
            .with_column(derived_column(col::DATE, &dates, |d| d.map(Value::Date)))?
            .with_column(derived_column(
                col::YEAR,
                &dates,
                |d| d.map(|d| Value::Integer(d.year() as i64)),
            ))?
            .with_column(derived_column(
                col::MONTH,
                &dates,
                |d| d.map(|d| Value::Integer(d.month() as i64)),
            ))?
            .with_column(derived_column(
                col::DAY_OF_WEEK,
                &dates,
                |d| d.as_ref().map(|d| Value::text(weekday_name(d))),
            ))?;
        derived.extend([col::DATE, col::YEAR, col::MONTH, col::DAY_OF_WEEK]);
    }

    if let Some(times) = ds.values(col::TIME) {
        let hours = derived_column(
            col::HOUR,
            times,
            |t| parse_hour(t).map(|h| Value::Integer(h as i64)),
        );
        ds = ds.with_column(hours)?;
        derived.push(col::HOUR);
    }

    if let Some(severity) = ds.values(col::SEVERITY) {
        let numeric = derived_column(
            col::SEVERITY_NUMERIC,
            severity,
            |s| severity_numeric(s).map(Value::Integer),
        );
        ds = ds.with_column(numeric)?;
        derived.push(col::SEVERITY_NUMERIC);
    }

    if let Some(ages) = ds.values(col::AGE) {
        let groups = derived_column(col::AGE_GROUP, ages, |a| age_group(a).map(Value::text));
        ds = ds.with_column(groups)?;
        derived.push(col::AGE_GROUP);
    }

    if let Some(days) = ds.values(col::DAY_OF_WEEK) {
        let weekend = derived_column(col::IS_WEEKEND, days, |d| is_weekend(d).map(Value::Bool));
        ds = ds.with_column(weekend)?;
        derived.push(col::IS_WEEKEND);
    }

    log::info!("Derived columns: {:?}", derived);
    Ok(DerivedDataset {
        dataset: ds,
        derived,
    })
}
