//! HTML output formatter
//!
//! Produces a standalone document with a single table. Comment cells are
//! given a background color by status.

use crate::output::{Report, ReportFormatter};
use quick_xml::escape::escape;
use std::io::Write;

const TABLE_STYLE: &str = "border-collapse: collapse;";
const ROW_STYLE: &str = "border-bottom:1pt solid black;";

/// HTML formatter
pub struct HtmlFormatter;

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "<html><body>")?;
        writeln!(writer, "<table style=\"{}\">", TABLE_STYLE)?;

        writeln!(writer, "    <thead>")?;
        writeln!(writer, "        <tr style=\"{}\">", ROW_STYLE)?;
        for header in report.headers() {
            writeln!(writer, "            <th>{}</th>", escape(header.as_str()))?;
        }
        writeln!(writer, "        </tr>")?;
        writeln!(writer, "    </thead>")?;

        writeln!(writer, "    <tbody>")?;
        for row in &report.rows {
            let cells = row.cells(report.include_obs);
            let Some((comment, values)) = cells.split_last() else {
                continue;
            };
            writeln!(writer, "        <tr style=\"{}\">", ROW_STYLE)?;
            for value in values {
                writeln!(writer, "            <td>{}</td>", escape(*value))?;
            }
            match row.status.html_color() {
                Some(color) => writeln!(
                    writer,
                    "            <td style=\"background-color:{}\">{}</td>",
                    color,
                    escape(*comment)
                )?,
                None => writeln!(writer, "            <td>{}</td>", escape(*comment))?,
            }
            writeln!(writer, "        </tr>")?;
        }
        writeln!(writer, "    </tbody>")?;

        writeln!(writer, "</table>")?;
        writeln!(writer, "</body></html>")?;
        Ok(())
    }
}
