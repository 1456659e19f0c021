//! Plain-text report
//!
//! Section banners, statistics and notes are printed as lines; charts are
//! drawn as ASCII tables by [`TextChartRenderer`].

use accident_report::stats::{BoxSummary, CorrelationMatrix, Frequency, GroupedCounts, Histogram};
use accident_report::{
    Artifact, ArtifactBody, ChartData, ChartRenderer, ChartSpec, Report, ReportConfig, ScatterPoint,
    Section,
};
use std::collections::BTreeMap;
use std::io::Write;

const BAR_WIDTH: usize = 40;

/// Draws chart specifications as text
pub struct TextChartRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextChartRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn frequencies(&mut self, entries: &[Frequency]) -> std::io::Result<()> {
        let labels: Vec<String> = entries.iter().map(|f| f.value.to_string()).collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let max = entries.iter().map(|f| f.count).max().unwrap_or(0).max(1);
        for (label, entry) in labels.iter().zip(entries) {
            writeln!(
                self.out,
                "  {:<width$} | {:<bar$} {}",
                label,
                "#".repeat(entry.count * BAR_WIDTH / max),
                entry.count,
                width = width,
                bar = BAR_WIDTH
            )?;
        }
        Ok(())
    }

    fn grouped(&mut self, grouped: &GroupedCounts) -> std::io::Result<()> {
        let header: Vec<String> = grouped.hues.iter().map(|h| h.to_string()).collect();
        let mut rows: Vec<Vec<String>> = Vec::new();
        for (category, counts) in grouped.categories.iter().zip(&grouped.counts) {
            let mut row = vec![category.to_string()];
            row.extend(counts.iter().map(|c| c.to_string()));
            rows.push(row);
        }
        let mut columns = vec![String::new()];
        columns.extend(header);
        write_table(&mut self.out, &columns, &rows)
    }

    fn distributions(&mut self, summaries: &[BoxSummary]) -> std::io::Result<()> {
        let columns: Vec<String> = ["", "n", "min", "q1", "median", "q3", "max"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows: Vec<Vec<String>> = summaries
            .iter()
            .map(|s| {
                vec![
                    s.category.to_string(),
                    s.count.to_string(),
                    format!("{:.2}", s.min),
                    format!("{:.2}", s.q1),
                    format!("{:.2}", s.median),
                    format!("{:.2}", s.q3),
                    format!("{:.2}", s.max),
                ]
            })
            .collect();
        write_table(&mut self.out, &columns, &rows)
    }

    fn histogram(&mut self, histogram: &Histogram) -> std::io::Result<()> {
        let max = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
        for (i, count) in histogram.counts.iter().enumerate() {
            let (lo, hi) = (histogram.edges[i], histogram.edges[i + 1]);
            let close = if i + 1 == histogram.counts.len() { ']' } else { ')' };
            writeln!(
                self.out,
                "  [{:>8.2}, {:>8.2}{} | {:<bar$} {}",
                lo,
                hi,
                close,
                "#".repeat(count * BAR_WIDTH / max),
                count,
                bar = BAR_WIDTH
            )?;
        }
        Ok(())
    }

    fn correlation(&mut self, matrix: &CorrelationMatrix) -> std::io::Result<()> {
        let mut columns = vec![String::new()];
        columns.extend(matrix.fields.iter().cloned());
        let rows: Vec<Vec<String>> = matrix
            .fields
            .iter()
            .zip(&matrix.values)
            .map(|(field, values)| {
                let mut row = vec![field.clone()];
                row.extend(values.iter().map(|v| match v {
                    Some(r) => format!("{:.2}", r),
                    None => "n/a".to_string(),
                }));
                row
            })
            .collect();
        write_table(&mut self.out, &columns, &rows)
    }

    fn points(&mut self, points: &[ScatterPoint]) -> std::io::Result<()> {
        let fold = |f: fn(&ScatterPoint) -> f64| {
            points.iter().map(f).fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
        };
        let (x_lo, x_hi) = fold(|p| p.x);
        let (y_lo, y_hi) = fold(|p| p.y);
        writeln!(self.out, "  {} points", points.len())?;
        writeln!(self.out, "  x range: {:.4} .. {:.4}", x_lo, x_hi)?;
        writeln!(self.out, "  y range: {:.4} .. {:.4}", y_lo, y_hi)?;

        let mut by_hue: BTreeMap<String, usize> = BTreeMap::new();
        for point in points {
            if let Some(hue) = &point.hue {
                *by_hue.entry(hue.to_string()).or_default() += 1;
            }
        }
        for (hue, count) in by_hue {
            writeln!(self.out, "  {}: {}", hue, count)?;
        }
        Ok(())
    }
}

impl<W: Write> ChartRenderer for TextChartRenderer<W> {
    fn render(&mut self, _artifact: &Artifact, chart: &ChartSpec) -> accident_report::Result<()> {
        writeln!(self.out, "\n[{}] {}", chart.kind, chart.title)?;
        match &chart.y {
            Some(_) => writeln!(self.out, "  x: {}   y: {}", chart.xlabel, chart.ylabel)?,
            None => writeln!(self.out, "  x: {}", chart.xlabel)?,
        }
        if let Some(hue) = &chart.hue {
            writeln!(self.out, "  hue: {}", hue)?;
        }

        match &chart.data {
            ChartData::Frequencies { entries } => self.frequencies(entries)?,
            ChartData::GroupedCounts(grouped) => self.grouped(grouped)?,
            ChartData::Distributions { summaries } => self.distributions(summaries)?,
            ChartData::Histogram(histogram) => self.histogram(histogram)?,
            ChartData::Correlation(matrix) => self.correlation(matrix)?,
            ChartData::Points { points } => self.points(points)?,
        }
        Ok(())
    }
}

/// Left-aligned table with a header rule
fn write_table<W: Write>(out: &mut W, columns: &[String], rows: &[Vec<String>]) -> std::io::Result<()> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    writeln!(out, "  {}", line(columns).trim_end())?;
    writeln!(out, "  {}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)))?;
    for row in rows {
        writeln!(out, "  {}", line(row).trim_end())?;
    }
    Ok(())
}

fn banner(title: &str) -> String {
    format!("\n================== {} ==================", title)
}

/// Write the whole report: every selected section in order, with its
/// artifacts underneath
pub fn write_report<W: Write>(report: &Report, config: &ReportConfig, out: &mut W) -> accident_report::Result<()> {
    for section in Section::ALL {
        if !config.should_run_section(section) {
            continue;
        }
        writeln!(out, "{}", banner(section.title()))?;

        for artifact in report.section(section) {
            match &artifact.body {
                ArtifactBody::Statistic { label, value, unit } => {
                    let unit = unit.as_deref().unwrap_or("");
                    match value {
                        Some(v) if unit.is_empty() && v.fract() == 0.0 => writeln!(out, "{}: {}", label, v)?,
                        Some(v) => writeln!(out, "{}: {:.2}{}", label, v, unit)?,
                        None => writeln!(out, "{}: undefined", label)?,
                    }
                }
                ArtifactBody::Table { title, columns, rows } => {
                    writeln!(out, "\n{}:", title)?;
                    write_table(out, columns, rows)?;
                }
                ArtifactBody::Note { text } => writeln!(out, "{}", text)?,
                ArtifactBody::Chart(chart) => {
                    TextChartRenderer::new(&mut *out).render(artifact, chart)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use accident_report::{derive, read_csv, CsvOptions, ReportGenerator};

    fn render(csv: &str, config: ReportConfig) -> String {
        let dataset = derive(read_csv(csv.as_bytes(), &CsvOptions::default()).unwrap()).unwrap();
        let report = ReportGenerator::new(config.clone()).run(&dataset);
        let mut out = Vec::new();
        write_report(&report, &config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_severity_statistics_are_printed() {
        let text = render("Severity\nFatal\nMinor\nSerious\n", ReportConfig::default());
        assert!(text.contains("3. Accident Severity Analysis"));
        assert!(text.contains("Total number of accidents recorded: 3"));
        assert!(text.contains("Percentage of Fatal Accidents: 33.33%"));
        assert!(text.contains("Percentage of Serious Accidents: 33.33%"));
        assert!(text.contains("[count] Distribution of Accident Severities"));
    }

    #[test]
    fn test_undefined_percentage() {
        let text = render("Severity,City\n,Leeds\n", ReportConfig::default());
        assert!(text.contains("Percentage of Fatal Accidents: undefined"));
    }

    #[test]
    fn test_section_filter_limits_banners() {
        let config = ReportConfig::new().with_sections(vec![Section::Geographic]);
        let text = render("City\nLeeds\nLeeds\nYork\n", config);
        assert!(text.contains("2. Geographical Distribution"));
        assert!(!text.contains("3. Accident Severity Analysis"));
        assert!(text.contains("Top 10 Cities with Highest Accident Frequency"));
    }

    #[test]
    fn test_overview_tables_have_titles() {
        let text = render("City,Age\nLeeds,34\nYork,51\n", ReportConfig::default());
        assert!(text.contains("\nFirst 2 rows of the dataset:\n"));
        assert!(text.contains("\nDataset Info:\n"));
        assert!(!text.contains("dataset_info:"));
    }

    #[test]
    fn test_frequency_bars() {
        let mut out = Vec::new();
        let mut renderer = TextChartRenderer::new(&mut out);
        renderer
            .frequencies(&[
                Frequency::new(accident_report::Value::text("Leeds"), 2),
                Frequency::new(accident_report::Value::text("York"), 1),
            ])
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  Leeds | ########################################"));
        assert!(lines[1].trim_end().ends_with(" 1"));
    }

    #[test]
    fn test_write_table_alignment() {
        let mut out = Vec::new();
        write_table(
            &mut out,
            &["Column".to_string(), "Type".to_string()],
            &[vec!["Severity".to_string(), "text".to_string()]],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "  Column    Type\n  --------------\n  Severity  text\n");
    }
}
