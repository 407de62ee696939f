// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for claimcheck

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Category assigned to a finding.
///
/// Classification is a substring check on the matched text, applied
/// uniformly to the output of every rule: anything containing "line" or
/// "row" is a line/reference claim, everything else a number/unit claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    NumberUnit,
    LineReference,
}

impl FindingCategory {
    pub fn classify(matched: &str) -> Self {
        if matched.contains("line") || matched.contains("row") {
            FindingCategory::LineReference
        } else {
            FindingCategory::NumberUnit
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::NumberUnit => write!(f, "Number/Unit"),
            FindingCategory::LineReference => write!(f, "Line/Reference"),
        }
    }
}

/// A located occurrence of a suspect pattern in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// The matched substring.
    pub matched: String,
    pub category: FindingCategory,
    /// Surrounding excerpt, newline-flattened and length-capped.
    pub context: String,
}

/// Result of scanning one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub source_path: PathBuf,
    pub findings: Vec<Finding>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
