//! Delimited file loader
//!
//! Reads a CSV (or other single-character delimited) file with a header row
//! into a [`Dataset`]. Cells are typed with [`Value::infer`]; no schema is
//! imposed. A missing or malformed file is fatal.
//!
//! [`Value::infer`]: crate::types::Value::infer

use crate::config::CsvOptions;
use crate::dataset::Dataset;
use crate::types::{ReportError, Result};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

fn delimiter_byte(options: &CsvOptions) -> Result<u8> {
    u8::try_from(options.delimiter)
        .map_err(|_| ReportError::InputParseError(format!("delimiter {:?} is not a single byte", options.delimiter)))
}

/// Rename repeated headers to `Name.1`, `Name.2`, ... so every column
/// stays addressable
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut renamed = Vec::with_capacity(headers.len());
    for header in headers {
        let name = header.trim().to_string();
        if seen.insert(name.clone()) {
            renamed.push(name);
            continue;
        }
        let mut n = 1;
        let unique = loop {
            let candidate = format!("{}.{}", name, n);
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        log::warn!("Duplicate column '{}' renamed to '{}'", name, unique);
        taken.insert(unique.clone());
        seen.insert(unique.clone());
        renamed.push(unique);
    }
    renamed
}

/// Load a delimited file from disk
pub fn load_csv(path: &Path, options: &CsvOptions) -> Result<Dataset> {
    log::info!("Loading dataset: {:?}", path);
    let file = std::fs::File::open(path)?;
    let dataset = read_csv(file, options)
        .map_err(|e| match e {
            ReportError::InputParseError(msg) => {
                ReportError::InputParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
    log::info!(
        "Loaded {} rows x {} columns from {:?}",
        dataset.row_count(),
        dataset.column_count(),
        path
    );
    Ok(dataset)
}

/// Read delimited data from any reader
pub fn read_csv<R: Read>(reader: R, options: &CsvOptions) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(options)?)
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReportError::InputParseError(format!("reading headers: {}", e)))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(ReportError::InputParseError("no header row".to_string()));
    }
    let headers = dedupe_headers(headers);
    log::trace!("Columns: {:?}", headers);

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| ReportError::InputParseError(format!("row {}: {}", row_no + 1, e)))?;
        records.push(record);
    }

    Dataset::from_text_rows(&headers, records.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    #[test]
    fn test_read_csv() {
        let data = "Date,Severity,Age\n2023-01-01,Fatal,34\n2023-01-02,,\n";
        let ds = read_csv(data.as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["Date", "Severity", "Age"]);
        assert_eq!(ds.values("Severity").unwrap()[1], Value::Missing);
        assert_eq!(ds.values("Age").unwrap()[0], Value::Integer(34));
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "City;Region\nLeeds;North\n";
        let ds = read_csv(data.as_bytes(), &CsvOptions::default().with_delimiter(';')).unwrap();
        assert_eq!(ds.values("Region").unwrap()[0], Value::text("North"));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let data = "A,B\n1,2\n3\n";
        let result = read_csv(data.as_bytes(), &CsvOptions::default());
        assert!(matches!(result, Err(ReportError::InputParseError(msg)) if msg.contains("row 2")));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let result = read_csv("".as_bytes(), &CsvOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_headers_are_renamed() {
        let data = "City,Severity,City,City.1,City\nLeeds,Fatal,York,Hull,Bath\n";
        let ds = read_csv(data.as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(
            ds.column_names().collect::<Vec<_>>(),
            vec!["City", "Severity", "City.2", "City.1", "City.3"]
        );
        assert_eq!(ds.values("City").unwrap()[0], Value::text("Leeds"));
        assert_eq!(ds.values("City.2").unwrap()[0], Value::text("York"));
        assert_eq!(ds.values("City.3").unwrap()[0], Value::text("Bath"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_csv(Path::new("definitely/not/here.csv"), &CsvOptions::default());
        assert!(matches!(result, Err(ReportError::IoError(_))));
    }

    #[test]
    fn test_multibyte_delimiter_is_rejected() {
        let options = CsvOptions::default().with_delimiter('¦');
        assert!(read_csv("a".as_bytes(), &options).is_err());
    }
}
