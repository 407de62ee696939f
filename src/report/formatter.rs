// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::types::{Finding, ScanReport};
use colored::*;

const CLEAN_MESSAGE: &str = "✅ Clean – no obvious hallucinations detected";
const TABLE_TITLE: &str = "Hallucination Alerts 🔥";

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &ScanReport) {
        println!("{}", self.render(report));
    }

    /// Render the full report. Split out from print so tests can assert on
    /// the exact output.
    pub fn render(&self, report: &ScanReport) -> String {
        if report.is_clean() {
            return CLEAN_MESSAGE.bold().green().to_string();
        }

        let mut out = self.render_table(&report.findings);
        out.push('\n');
        out.push_str(
            &format!(
                "Found {} potential hallucinations. Fix or flag before publishing.",
                report.findings.len()
            )
            .bold()
            .red()
            .to_string(),
        );
        out
    }

    fn render_table(&self, findings: &[Finding]) -> String {
        // Pad the narrow columns to the widest cell; context runs free.
        let type_width = findings
            .iter()
            .map(|f| f.category.to_string().chars().count())
            .max()
            .unwrap_or(0)
            .max("Type".len());
        let match_width = findings
            .iter()
            .map(|f| f.matched.chars().count())
            .max()
            .unwrap_or(0)
            .max("Match".len());

        let mut lines = Vec::new();
        lines.push(TABLE_TITLE.bold().cyan().to_string());
        lines.push(format!(
            "  {:<type_width$}  {:<match_width$}  {}",
            "Type", "Match", "Context"
        ));
        lines.push(format!(
            "  {:-<type_width$}  {:-<match_width$}  {:-<7}",
            "", "", ""
        ));

        for finding in findings {
            lines.push(format!(
                "  {:<type_width$}  {:<match_width$}  {}",
                finding.category.to_string(),
                finding.matched,
                finding.context
            ));
        }

        lines.push(String::new());
        lines.join("\n")
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
