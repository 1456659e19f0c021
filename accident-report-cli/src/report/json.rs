//! JSON report
//!
//! Chart specifications are written one file per chart so that a plotting
//! tool can pick them up individually.

use accident_report::{Artifact, ChartRenderer, ChartSpec, Report, ReportError};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes each chart as `NN_<step>.json` into an output directory
pub struct JsonChartWriter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonChartWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far, in render order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

#[derive(Serialize)]
struct ChartFile<'a> {
    step: &'a str,
    section: accident_report::Section,
    chart: &'a ChartSpec,
}

impl ChartRenderer for JsonChartWriter {
    fn render(&mut self, artifact: &Artifact, chart: &ChartSpec) -> accident_report::Result<()> {
        let path = self
            .dir
            .join(format!("{:02}_{}.json", self.written.len() + 1, artifact.step));
        let file = ChartFile {
            step: &artifact.step,
            section: artifact.section,
            chart,
        };
        write_json(&path, &file)?;
        log::debug!("Wrote chart {:?}", path);
        self.written.push(path);
        Ok(())
    }
}

/// Write the whole report (artifacts and skipped steps) as one JSON document
pub fn write_report_json(report: &Report, path: &Path) -> accident_report::Result<()> {
    write_json(path, report)?;
    log::info!("Wrote report {:?}", path);
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> accident_report::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| ReportError::RenderError(format!("{}: {}", path.display(), e)))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use accident_report::{derive, read_csv, render_charts, CsvOptions, ReportGenerator};

    fn report(csv: &str) -> Report {
        let dataset = derive(read_csv(csv.as_bytes(), &CsvOptions::default()).unwrap()).unwrap();
        ReportGenerator::default().run(&dataset)
    }

    #[test]
    fn test_one_file_per_chart() {
        let report = report("City,Severity\nLeeds,Fatal\nYork,Minor\nLeeds,Minor\n");
        let dir = tempfile::tempdir().unwrap();
        let mut writer = JsonChartWriter::new(dir.path());

        let rendered = render_charts(&report, &mut writer).unwrap();
        assert_eq!(rendered, report.charts().count());
        assert_eq!(writer.written().len(), rendered);

        let first = &writer.written()[0];
        let name = first.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("01_"), "{}", name);

        let contents = std::fs::read_to_string(first).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(json["chart"]["title"].is_string());
        assert!(json["section"].is_string());
    }

    #[test]
    fn test_report_json() {
        let report = report("City\nLeeds\n");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report_json(&report, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json["artifacts"].as_array().unwrap().len() > 1);
        assert!(json["skipped"]
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["step"] == "severity_distribution"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let report = report("City\nLeeds\n");
        let mut writer = JsonChartWriter::new("no/such/dir");
        assert!(render_charts(&report, &mut writer).is_err());
    }
}
