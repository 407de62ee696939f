// SPDX-License-Identifier: PMPL-1.0-or-later

//! Suspect-pattern scanning
//!
//! One pure pass over the loaded text: each rule runs to completion before
//! the next, so all quantitative-claim findings precede all code-reference
//! findings, each group in left-to-right text order.

mod loader;
pub mod rules;

pub use loader::load_file;

use crate::types::{Finding, FindingCategory, ScanReport};
use anyhow::Result;
use rules::{in_bracketed_span, RuleSet};
use std::path::Path;

/// Number of bytes of surrounding text shown on each side of a match.
const CONTEXT_RADIUS: usize = 30;

/// Maximum context length, in characters, before the ellipsis.
const CONTEXT_CAP: usize = 120;

pub struct Scanner {
    rules: RuleSet,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::default(),
        }
    }

    /// Apply every rule to the text and collect findings. Total over any
    /// input string; cannot fail.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for rule in self.rules.rules() {
            for m in rule.pattern.find_iter(text) {
                if rule.bracket_exempt && in_bracketed_span(text, m.start(), m.end()) {
                    continue;
                }

                let matched = m.as_str().to_string();
                let category = FindingCategory::classify(&matched);
                let context = context_window(text, m.start(), m.end());

                findings.push(Finding {
                    start: m.start(),
                    end: m.end(),
                    matched,
                    category,
                    context,
                });
            }
        }

        findings
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a document and scan it in one step.
pub fn scan_file(path: &Path) -> Result<ScanReport> {
    let text = load_file(path)?;
    let findings = Scanner::new().scan(&text);

    Ok(ScanReport {
        source_path: path.to_path_buf(),
        findings,
    })
}

/// Excerpt around a match: CONTEXT_RADIUS bytes each side (clamped to the
/// text, widened outward to char boundaries), newlines flattened to spaces,
/// trimmed, capped at CONTEXT_CAP chars, and always suffixed with "...".
fn context_window(text: &str, start: usize, end: usize) -> String {
    let mut lo = start.saturating_sub(CONTEXT_RADIUS);
    while !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = end.saturating_add(CONTEXT_RADIUS).min(text.len());
    while !text.is_char_boundary(hi) {
        hi += 1;
    }

    let window = text[lo..hi].replace('\n', " ");
    let capped: String = window.trim().chars().take(CONTEXT_CAP).collect();
    format!("{capped}...")
}
