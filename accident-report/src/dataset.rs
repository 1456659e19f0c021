//! In-memory tabular dataset
//!
//! A dataset is an ordered list of equally long columns. Column presence is
//! what gates every analysis step, so lookups by name are the primary API.

use crate::types::{ReportError, Result, Value};
use serde::Serialize;
use std::collections::HashSet;

/// A named column of cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of cells that are not `Missing`
    pub fn non_missing(&self) -> usize {
        self.values.iter().filter(|v| !v.is_missing()).count()
    }

    /// Dominant type of the column, `mixed` when several types occur
    pub fn inferred_type(&self) -> &'static str {
        let mut seen: Option<&'static str> = None;
        for value in self.values.iter().filter(|v| !v.is_missing()) {
            let name = match value {
                Value::Integer(_) | Value::Float(_) => "numeric",
                other => other.type_name(),
            };
            match seen {
                None => seen = Some(name),
                Some(prev) if prev != name => return "mixed",
                _ => {}
            }
        }
        seen.unwrap_or("empty")
    }
}

/// A purely numeric column holding any float is read as all floats, so `2`
/// and `2.0` land in the same category
fn upcast_numeric(values: Vec<Value>) -> Vec<Value> {
    let present = || values.iter().filter(|v| !v.is_missing());
    let all_numeric = present().all(Value::is_numeric);
    let has_float = present().any(|v| matches!(v, Value::Float(_)));
    let has_integer = present().any(|v| matches!(v, Value::Integer(_)));
    if !(all_numeric && has_float && has_integer) {
        return values;
    }
    values
        .into_iter()
        .map(|v| match v {
            Value::Integer(i) => Value::float(i as f64),
            other => other,
        })
        .collect()
}

/// Ordered collection of rows, stored column by column
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from columns, checking they all have the same length
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(|c| c.values.len()).unwrap_or(0);
        let mut names = HashSet::new();
        for column in &columns {
            if column.values.len() != row_count {
                return Err(ReportError::ShapeMismatch {
                    column: column.name.clone(),
                    expected: row_count,
                    found: column.values.len(),
                });
            }
            if !names.insert(column.name.as_str()) {
                return Err(ReportError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self { columns, row_count })
    }

    /// Build a dataset from a header row and text rows, inferring cell types
    ///
    /// Short rows are padded with `Missing`; long rows are an error.
    pub fn from_text_rows<H, R, S>(headers: &[H], rows: R) -> Result<Self>
    where
        H: AsRef<str>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
        for (row_no, row) in rows.into_iter().enumerate() {
            let mut width = 0;
            for (idx, cell) in row.into_iter().enumerate() {
                let column = values.get_mut(idx).ok_or_else(|| {
                    ReportError::InputParseError(format!(
                        "row {} has more fields than the {} headers",
                        row_no + 1,
                        headers.len()
                    ))
                })?;
                column.push(Value::infer(cell.as_ref()));
                width = idx + 1;
            }
            for column in values.iter_mut().skip(width) {
                column.push(Value::Missing);
            }
        }

        let columns = headers
            .iter()
            .zip(values)
            .map(|(name, values)| Column::new(name.as_ref().trim(), upcast_numeric(values)))
            .collect();
        Self::new(columns)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Cells of a column, if the column is present
    pub fn values(&self, name: &str) -> Option<&[Value]> {
        self.column(name).map(|c| c.values.as_slice())
    }

    /// First `n` rows, rendered as text in column order
    pub fn head(&self, n: usize) -> Vec<Vec<String>> {
        (0..self.row_count.min(n))
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| c.values[row].to_string())
                    .collect()
            })
            .collect()
    }

    /// Return a dataset with `column` appended, or replacing a column of the
    /// same name in place
    pub fn with_column(mut self, column: Column) -> Result<Self> {
        if !self.columns.is_empty() && column.values.len() != self.row_count {
            return Err(ReportError::ShapeMismatch {
                column: column.name,
                expected: self.row_count,
                found: column.values.len(),
            });
        }
        if self.columns.is_empty() {
            self.row_count = column.values.len();
        }
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_text_rows(
            &["City", "Age", "Severity"],
            vec![
                vec!["Leeds", "34", "Minor"],
                vec!["York", "", "Fatal"],
                vec!["Leeds", "71"],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_text_rows() {
        let ds = sample();
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.column_count(), 3);
        assert_eq!(
            ds.values("Age").unwrap(),
            &[Value::Integer(34), Value::Missing, Value::Integer(71)]
        );
        // short rows are padded
        assert_eq!(ds.values("Severity").unwrap()[2], Value::Missing);
    }

    #[test]
    fn test_mixed_integer_float_column_is_float() {
        let ds = Dataset::from_text_rows(
            &["Injury_Count", "Code"],
            vec![vec!["2", "7"], vec!["2.0", "x"], vec!["", "7.5"]],
        )
        .unwrap();
        assert_eq!(
            ds.values("Injury_Count").unwrap(),
            &[Value::Float(2.0), Value::Float(2.0), Value::Missing]
        );
        // columns with text keep each cell as read
        assert_eq!(
            ds.values("Code").unwrap(),
            &[Value::Integer(7), Value::text("x"), Value::Float(7.5)]
        );
    }

    #[test]
    fn test_long_row_is_rejected() {
        let result = Dataset::from_text_rows(&["A"], vec![vec!["1", "2"]]);
        assert!(matches!(result, Err(ReportError::InputParseError(_))));
    }

    #[test]
    fn test_shape_mismatch() {
        let result = Dataset::new(vec![
            Column::new("A", vec![Value::Integer(1)]),
            Column::new("B", vec![]),
        ]);
        assert!(matches!(result, Err(ReportError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_duplicate_column() {
        let result = Dataset::new(vec![
            Column::new("A", vec![Value::Integer(1)]),
            Column::new("A", vec![Value::Integer(2)]),
        ]);
        assert!(matches!(result, Err(ReportError::DuplicateColumn(_))));
    }

    #[test]
    fn test_with_column_appends_and_replaces() {
        let ds = sample()
            .with_column(Column::new("Flag", vec![Value::Bool(true); 3]))
            .unwrap();
        assert!(ds.has_column("Flag"));
        assert_eq!(ds.column_count(), 4);

        let ds = ds
            .with_column(Column::new("City", vec![Value::Missing; 3]))
            .unwrap();
        assert_eq!(ds.column_count(), 4);
        assert_eq!(ds.column("City").unwrap().non_missing(), 0);

        assert!(ds.with_column(Column::new("Short", vec![])).is_err());
    }

    #[test]
    fn test_head_and_types() {
        let ds = sample();
        let head = ds.head(2);
        assert_eq!(head.len(), 2);
        assert_eq!(head[1], vec!["York", "<missing>", "Fatal"]);
        assert_eq!(ds.column("Age").unwrap().inferred_type(), "numeric");
        assert_eq!(ds.column("City").unwrap().inferred_type(), "text");
    }
}
