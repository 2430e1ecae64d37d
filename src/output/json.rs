//! JSON output formatter for machine processing

use crate::output::{Report, ReportFormatter};
use serde::Serialize;
use std::io::Write;

/// JSON formatter
pub struct JsonFormatter;

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    release: &'a str,
    include_obs: bool,
    projects: Vec<JsonProject<'a>>,
}

/// JSON representation of a project row
#[derive(Serialize)]
struct JsonProject<'a> {
    name: &'a str,
    release: &'a str,
    upper_constraints: &'a str,
    rpm_packaging: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    obs: Option<&'a str>,
    comment: &'static str,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            release: &report.release,
            include_obs: report.include_obs,
            projects: report
                .rows
                .iter()
                .map(|row| JsonProject {
                    name: &row.name,
                    release: &row.release,
                    upper_constraints: &row.upper_constraints,
                    rpm_packaging: &row.rpm_packaging,
                    obs: report.include_obs.then_some(row.obs.as_str()),
                    comment: row.status.label(),
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_report;
    use serde_json::Value;

    fn render(include_obs: bool) -> Value {
        let mut buf = Vec::new();
        JsonFormatter
            .format(&sample_report(include_obs), &mut buf)
            .unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_json_schema() {
        let json = render(false);
        assert_eq!(json["release"], "mitaka");
        assert_eq!(json["include_obs"], false);

        let projects = json["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0]["name"], "cinder");
        assert_eq!(projects[0]["upper_constraints"], "-");
        assert_eq!(projects[0]["rpm_packaging"], "0");
        assert_eq!(projects[0]["comment"], "needs packaging");
        assert!(projects[0].get("obs").is_none());
    }

    #[test]
    fn test_json_obs() {
        let json = render(true);
        assert_eq!(json["projects"][1]["obs"], "13.0.0");
    }
}
