// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The audit has one job, so there are no subcommands: point it at a
// document root and it prints the report. Every option has a default that
// matches the standard docs layout, so a bare `link-audit` just works.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::report::ReportOptions;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-audit",
    version,
    about = "Audit internal links across a tree of markdown documents",
    long_about = "link-audit scans every .md file under a documentation root, checks that each \
                  internal link points at an existing document, and prints a report of broken \
                  links, heavily linked targets, and the most link-dense files."
)]
pub struct Cli {
    /// Documentation root to scan
    ///
    /// Example: link-audit docs/betadocs
    #[arg(default_value = "docs/betadocs")]
    pub root: PathBuf,

    /// Site root marker: links starting with /<MARKER>/ are root-absolute,
    /// and documents are also registered as /<MARKER>/<path> and <MARKER>/<path>
    #[arg(long, default_value = "docs", value_name = "MARKER")]
    pub root_marker: String,

    /// Title for the report header (default: the root directory's name, upper-cased)
    #[arg(long)]
    pub title: Option<String>,

    /// Distinct linking documents needed before a target is listed as redundant
    #[arg(long, default_value_t = 5, value_name = "N")]
    pub redundant_threshold: usize,

    /// How many files to show in the "files with most links" section
    #[arg(long, default_value_t = 15, value_name = "N")]
    pub top: usize,

    /// Print progress to stderr while scanning
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // Collects the report-related options
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self
                .title
                .clone()
                .unwrap_or_else(|| default_title(&self.root)),
            redundant_threshold: self.redundant_threshold,
            top_files: self.top,
        }
    }
}

// "docs/betadocs" -> "BETADOCS"
fn default_title(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}
