//! Output formatting for the packaging status report
//!
//! This module provides:
//! - Text output as a bordered table for terminals
//! - HTML output with status colors
//! - JSON output for machine processing

mod html;
mod json;
mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::{PackagingStatus, ProjectVersionRecord};
use clap::ValueEnum;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bordered text table
    #[default]
    Text,
    /// HTML table with colored comments
    Html,
    /// JSON for machine processing
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, html, json)
    pub format: OutputFormat,
    /// Whether to use colors (text only)
    pub color: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }
}

/// One report row, with all versions already rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub release: String,
    pub upper_constraints: String,
    pub rpm_packaging: String,
    pub obs: String,
    pub status: PackagingStatus,
}

impl ReportRow {
    fn from_record(record: &ProjectVersionRecord) -> Self {
        Self {
            name: record.name.clone(),
            release: record.release_version.to_string(),
            upper_constraints: record.upper_constraint.to_string(),
            rpm_packaging: record.packaging_version.to_string(),
            obs: record.obs_published_version.to_string(),
            status: record.status(),
        }
    }

    /// Cell values in column order; the comment is always last
    pub fn cells(&self, include_obs: bool) -> Vec<&str> {
        let mut cells = vec![
            self.name.as_str(),
            self.release.as_str(),
            self.upper_constraints.as_str(),
            self.rpm_packaging.as_str(),
        ];
        if include_obs {
            cells.push(self.obs.as_str());
        }
        cells.push(self.status.label());
        cells
    }
}

/// Classified projects of one release, sorted by name
#[derive(Debug, Clone)]
pub struct Report {
    /// Release cycle name, shown in the column headers
    pub release: String,
    /// Whether the obs column is shown
    pub include_obs: bool,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(release: &str, records: &[ProjectVersionRecord], include_obs: bool) -> Self {
        let mut rows: Vec<ReportRow> = records.iter().map(ReportRow::from_record).collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            release: release.to_string(),
            include_obs,
            rows,
        }
    }

    /// Column headers
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![
            "name".to_string(),
            format!("release ({})", self.release),
            format!("u-c ({})", self.release),
            format!("rpm packaging ({})", self.release),
        ];
        if self.include_obs {
            headers.push("obs".to_string());
        }
        headers.push("comment".to_string());
        headers
    }
}

/// Trait for output formatters
pub trait ReportFormatter {
    /// Format and write the report
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn ReportFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new(config.color)),
        OutputFormat::Html => Box::new(HtmlFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
