// SPDX-License-Identifier: PMPL-1.0-or-later

//! Suspect-pattern rule definitions
//!
//! The scan is driven by a small ordered table of rules, each a compiled
//! regular expression plus a flag for the bracket exemption. Alternation
//! order inside each pattern is load-bearing: the regex engine is
//! leftmost-first, so e.g. "500 rows" matches only "500 row".

use regex::Regex;

/// Digit runs (1-4 digits, optional comma/digit groups) glued to a unit or
/// count word. Bracket-exempt: citations like "[1500 bytes]" are skipped.
const SUSPECT_NUMBERS: &str =
    r"\d{1,4}[,\d]*\s?(?:bytes?|B|KB|MB|GB|ms|s|line\s?\d+|row|rows|duplicate)";

/// Tokens shaped like source citations: a path ending in .rs with a line
/// number, an empty call, a bare unwrap(), or a prost:: qualifier.
const SUSPECT_REFERENCES: &str = r"[a-zA-Z0-9_/]+\.rs:\d+|[a-z_]+\(\)|\bunwrap\(\)|\bprost::";

pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    /// Skip matches that sit inside a square-bracketed span.
    pub bracket_exempt: bool,
}

pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            rules: Self::build_rules(),
        }
    }

    /// Build the complete rule table, in report order.
    fn build_rules() -> Vec<Rule> {
        vec![
            Rule {
                name: "suspect_numbers",
                pattern: Regex::new(SUSPECT_NUMBERS).expect("suspect_numbers pattern is valid"),
                bracket_exempt: true,
            },
            Rule {
                name: "suspect_references",
                pattern: Regex::new(SUSPECT_REFERENCES)
                    .expect("suspect_references pattern is valid"),
                bracket_exempt: false,
            },
        ]
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Citation exemption, run as a post-filter since the regex crate has no
/// lookaround: a match is exempt if the byte immediately before it is `[`,
/// or if the next `]` at or after its end comes before the next `[`.
/// An opening bracket that never closes exempts the whole match.
pub fn in_bracketed_span(text: &str, start: usize, end: usize) -> bool {
    if text.as_bytes()[..start].last() == Some(&b'[') {
        return true;
    }
    for &b in text.as_bytes()[end..].iter() {
        match b {
            b'[' => return false,
            b']' => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruleset_creation() {
        let ruleset = RuleSet::new();
        assert_eq!(ruleset.rules().len(), 2);
    }

    #[test]
    fn test_rule_names_and_order() {
        let ruleset = RuleSet::new();
        let names: Vec<_> = ruleset.rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["suspect_numbers", "suspect_references"]);
    }

    #[test]
    fn test_only_numbers_rule_is_bracket_exempt() {
        let ruleset = RuleSet::new();
        assert!(ruleset.rules()[0].bracket_exempt);
        assert!(!ruleset.rules()[1].bracket_exempt);
    }

    #[test]
    fn test_bracketed_span_detection() {
        let text = "saved [1500 bytes] overall";
        // "1500 bytes" starts right after the opening bracket.
        assert!(in_bracketed_span(text, 7, 17));
        // Closing bracket ahead with no opening one in between.
        assert!(in_bracketed_span("1500 bytes] cited", 0, 10));
        // Opening bracket ahead means the span has not closed over us.
        assert!(!in_bracketed_span("1500 bytes [ref]", 0, 10));
        assert!(!in_bracketed_span("plain 1500 bytes", 6, 16));
    }

    #[test]
    fn test_unclosed_bracket_exempts_whole_match() {
        let text = "saved [1500 bytes with no closing bracket";
        assert!(in_bracketed_span(text, 7, 17));
    }
}
