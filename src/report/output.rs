// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output format selection for printed reports

use crate::report::formatter::ReportFormatter;
use crate::types::ScanReport;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    /// Styled human-readable table.
    Text,
    /// Machine-readable report on stdout.
    Json,
}

impl ReportOutputFormat {
    pub fn render(&self, report: &ScanReport) -> Result<()> {
        match self {
            ReportOutputFormat::Text => {
                ReportFormatter::new().print(report);
                Ok(())
            }
            ReportOutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
                Ok(())
            }
        }
    }
}
