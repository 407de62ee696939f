// SPDX-License-Identifier: PMPL-1.0-or-later

//! claimcheck: scan a document for patterns that resemble fabricated
//! technical claims and report them.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use claimcheck::report::ReportOutputFormat;
use claimcheck::scanner;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "claimcheck")]
#[command(version)]
#[command(about = "Detect fabricated technical claims in prose and documentation")]
struct Cli {
    /// Text or markdown file to scan
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ReportOutputFormat,
}

fn main() -> Result<()> {
    // Malformed invocations must exit 1; clap's default error code is 2.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = err.print();
        std::process::exit(code);
    });

    let report = scanner::scan_file(&cli.file)?;
    cli.format.render(&report)?;

    Ok(())
}
