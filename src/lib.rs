// SPDX-License-Identifier: PMPL-1.0-or-later

//! claimcheck — heuristic detection of fabricated technical claims.
//!
//! Scans a text document for patterns that tend to show up in hallucinated
//! technical writing: suspiciously specific quantitative claims ("1500
//! bytes", "300 ms") and source citations that look copied from code but
//! usually are not ("src/main.rs:42", "unwrap()").
//!
//! The pipeline is strictly linear: load the document, run each rule over
//! the full text, render the findings as a table with surrounding context.
//! Numbers enclosed in square brackets are treated as properly sourced
//! citations and skipped.

pub mod report;
pub mod scanner;
pub mod types;
