//! Rendering collaborator interface
//!
//! The library does not draw anything. A renderer receives each chart
//! specification together with the artifact that carries it and turns it
//! into whatever output it produces (an image, a text table, a JSON file).

use crate::artifact::{Artifact, ChartSpec};
use crate::generator::Report;
use crate::types::Result;

/// Consumes chart specifications
pub trait ChartRenderer {
    /// Render one chart; `artifact` identifies the step and section
    fn render(&mut self, artifact: &Artifact, chart: &ChartSpec) -> Result<()>;
}

/// Hand every chart of a report to a renderer, in report order
///
/// Returns the number of charts rendered. Stops at the first render error.
pub fn render_charts<R: ChartRenderer + ?Sized>(report: &Report, renderer: &mut R) -> Result<usize> {
    let mut rendered = 0;
    for artifact in &report.artifacts {
        if let Some(chart) = artifact.body.as_chart() {
            log::trace!("Rendering chart for step {}", artifact.step);
            renderer.render(artifact, chart)?;
            rendered += 1;
        }
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ArtifactBody, ChartData, ChartKind, Section};
    use crate::types::ReportError;

    #[derive(Default)]
    struct Recorder {
        titles: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl ChartRenderer for Recorder {
        fn render(&mut self, artifact: &Artifact, chart: &ChartSpec) -> Result<()> {
            if self.fail_on == Some(artifact.step.as_str()) {
                return Err(ReportError::RenderError(format!("cannot draw {}", artifact.step)));
            }
            self.titles.push(chart.title.clone());
            Ok(())
        }
    }

    fn report() -> Report {
        let chart = |step: &str, title: &str| {
            Artifact::new(
                step,
                Section::Geographic,
                ArtifactBody::Chart(ChartSpec::new(
                    ChartKind::Bar,
                    title,
                    "City",
                    ChartData::Frequencies { entries: vec![] },
                )),
            )
        };
        Report {
            artifacts: vec![
                chart("a", "First"),
                Artifact::new("note", Section::Comparative, ArtifactBody::Note { text: "n".into() }),
                chart("b", "Second"),
            ],
            skipped: vec![],
        }
    }

    #[test]
    fn test_render_charts_in_order() {
        let mut recorder = Recorder::default();
        let count = render_charts(&report(), &mut recorder).unwrap();
        assert_eq!(count, 2);
        assert_eq!(recorder.titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_render_error_stops() {
        let mut recorder = Recorder {
            fail_on: Some("b"),
            ..Default::default()
        };
        let result = render_charts(&report(), &mut recorder);
        assert!(matches!(result, Err(ReportError::RenderError(_))));
        assert_eq!(recorder.titles, vec!["First"]);
    }
}
