//! Text output formatter for human-readable display
//!
//! Renders a bordered table:
//!
//! ```text
//! +------+------------------+
//! | name | release (mitaka) |
//! +------+------------------+
//! | nova |      13.0.0      |
//! +------+------------------+
//! ```

use crate::domain::PackagingStatus;
use crate::output::{Report, ReportFormatter};
use colored::Colorize;
use std::io::Write;

/// Text formatter for terminal output
pub struct TextFormatter {
    /// Whether to colorize the comment column
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colorize an already padded comment cell
    fn paint(&self, status: PackagingStatus, cell: String) -> String {
        if !self.color {
            return cell;
        }
        match status {
            PackagingStatus::NeedsPackaging => cell.yellow().to_string(),
            PackagingStatus::NeedsUpgrade => cell.bright_yellow().to_string(),
            PackagingStatus::NeedsDowngrade | PackagingStatus::NeedsDowngradeUpperConstraint => {
                cell.red().to_string()
            }
            PackagingStatus::Perfect => cell.green().to_string(),
            PackagingStatus::Unknown => cell,
        }
    }
}

/// Column widths in characters
fn column_widths(headers: &[String], rows: &[Vec<&str>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let headers = report.headers();
        let rows: Vec<Vec<&str>> = report
            .rows
            .iter()
            .map(|r| r.cells(report.include_obs))
            .collect();
        let widths = column_widths(&headers, &rows);
        let rule = rule(&widths);
        let comment_col = widths.len() - 1;

        writeln!(writer, "{}", rule)?;
        let header_cells: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| center(h, *w))
            .collect();
        writeln!(writer, "| {} |", header_cells.join(" | "))?;
        writeln!(writer, "{}", rule)?;

        for (row, cells) in report.rows.iter().zip(&rows) {
            let rendered: Vec<String> = cells
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = center(cell, *w);
                    if i == comment_col {
                        self.paint(row.status, padded)
                    } else {
                        padded
                    }
                })
                .collect();
            writeln!(writer, "| {} |", rendered.join(" | "))?;
        }
        writeln!(writer, "{}", rule)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_report;

    fn render(include_obs: bool) -> String {
        let mut buf = Vec::new();
        TextFormatter::new(false)
            .format(&sample_report(include_obs), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let output = render(false);
        let lines: Vec<&str> = output.lines().collect();
        // rule, header, rule, 3 rows, rule
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("+------"));
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[6]);
        assert!(lines[1].contains("release (mitaka)"));
        assert!(lines[1].contains("rpm packaging (mitaka)"));
        assert!(!lines[1].contains("obs"));

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_rows_in_name_order() {
        let output = render(false);
        let cinder = output.find("cinder").unwrap();
        let nova = output.find("nova").unwrap();
        let oslo = output.find("oslo.log").unwrap();
        assert!(cinder < nova && nova < oslo);
    }

    #[test]
    fn test_comments() {
        let output = render(false);
        assert!(output.contains("needs packaging"));
        assert!(output.contains("needs upgrade"));
        assert!(output.contains("perfect"));
    }

    #[test]
    fn test_obs_column() {
        let output = render(true);
        assert!(output.lines().nth(1).unwrap().contains(" obs "));
    }

    #[test]
    fn test_plain_output_has_no_ansi() {
        assert!(!render(false).contains('\u{1b}'));
    }

    #[test]
    fn test_empty_report() {
        let mut buf = Vec::new();
        let report = Report::new("mitaka", &[], false);
        TextFormatter::new(false).format(&report, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 4);
    }
}
