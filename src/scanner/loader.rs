// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document loading with encoding fallback

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read the whole document into memory. UTF-8 first, Windows-1252 as a
/// fallback for legacy exports; anything else is rejected as non-text.
pub fn load_file(path: &Path) -> Result<String> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    match String::from_utf8(raw) {
        Ok(text) => Ok(text),
        Err(err) => {
            let raw = err.into_bytes();
            let (cow, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&raw);
            if had_errors {
                anyhow::bail!(
                    "not a text file (neither UTF-8 nor Latin-1): {}",
                    path.display()
                );
            }
            Ok(cow.into_owned())
        }
    }
}
