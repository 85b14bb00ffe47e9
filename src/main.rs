// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Index every markdown document under the root
// 3. Scan each document's links and check them against the index
// 4. Print the report to stdout
// 5. Exit with proper code (0 = report printed, 2 = fatal error)
//
// Broken links are informational: finding some still exits with 0.
// =============================================================================

// Module declarations - tells Rust about our other source files
// logger comes first so its log!/warn! macros are visible to the rest
#[macro_use]
mod logger;
mod checker; // src/checker/ - link extraction and path resolution
mod cli; // src/cli.rs - command-line parsing
mod index; // src/index/ - document index and existence checks
mod report; // src/report/ - tallying and the text report

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use std::io::{self, Write};

use checker::PathResolver;
use cli::Cli;

fn main() {
    let exit_code = match run() {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    log!("index"; "scanning {}", cli.root.display());
    let index = index::build_index(&cli.root, &cli.root_marker)
        .with_context(|| format!("Failed to index documents under {}", cli.root.display()))?;
    if index.is_empty() {
        warn!("index"; "no .md documents under {}", cli.root.display());
    }
    log!("index"; "found {} document(s)", index.len());

    let resolver = PathResolver::new(&cli.root_marker);
    let results = report::run_audit(&index, &resolver);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::render_report(&mut out, &results, &cli.report_options())
        .and_then(|()| out.flush())
        .context("Failed to write the report")?;

    Ok(())
}
