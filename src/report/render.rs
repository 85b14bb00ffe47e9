// src/report/render.rs
// =============================================================================
// Renders AuditResults as the plain-text report.
//
// Sections, always in this order, each under an 80-column "=" rule:
//   header, summary, broken links (only if any), redundant links,
//   files with most links, footer
//
// The renderer writes into any io::Write. main passes a locked stdout;
// tests pass a Vec<u8> and look at the text.
// =============================================================================

use std::io::{self, Write};

use super::audit::AuditResults;

const RULE_WIDTH: usize = 80;

// At most this many sources are listed under a redundant target
const MAX_LISTED_SOURCES: usize = 10;

// Knobs for the report, filled in from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Prefix of the header line, e.g. "BETADOCS"
    pub title: String,
    /// Distinct sources a target needs to be listed as redundant
    pub redundant_threshold: usize,
    /// Number of entries in the "files with most links" section
    pub top_files: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            title: String::new(),
            redundant_threshold: 5,
            top_files: 15,
        }
    }
}

fn section<W: Write>(out: &mut W, heading: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", rule)
}

// Writes the full report for `results`
pub fn render_report<W: Write>(
    out: &mut W,
    results: &AuditResults,
    options: &ReportOptions,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    // Header
    let heading = if options.title.is_empty() {
        "LINK AUDIT REPORT".to_string()
    } else {
        format!("{} LINK AUDIT REPORT", options.title)
    };
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", rule)?;

    // Summary
    writeln!(out)?;
    writeln!(out, "Total files processed: {}", results.total_files)?;
    writeln!(out, "Total links found: {}", results.total_links)?;
    writeln!(out, "Valid links: {}", results.valid_links)?;
    writeln!(out, "Broken links: {}", results.broken_count())?;
    writeln!(out, "External links: {}", results.external_links.len())?;
    writeln!(out, "Anchor links: {}", results.anchor_links.len())?;

    let failures: Vec<_> = results.failures().collect();
    if !failures.is_empty() {
        writeln!(out, "Unreadable files: {}", failures.len())?;
        for (path, error) in failures {
            writeln!(out, "  - {}: {}", path, error)?;
        }
    }

    // Broken links, grouped by the document they appear in
    if !results.broken_links.is_empty() {
        section(out, "BROKEN LINKS")?;
        for (source, links) in results.broken_by_source() {
            writeln!(out)?;
            writeln!(out, "{}:", source)?;
            for link in links {
                writeln!(out, "  Line {}: [{}]({})", link.line, link.label, link.target)?;
                writeln!(
                    out,
                    "    -> Resolved to: {}",
                    link.resolved.as_deref().unwrap_or("")
                )?;
                writeln!(out, "    -> Type: {}", link.kind)?;
            }
        }
    }

    // Targets linked from many places
    section(
        out,
        &format!(
            "REDUNDANT LINKS (targets linked from {}+ sources)",
            options.redundant_threshold
        ),
    )?;
    for redundant in results.redundant_targets(options.redundant_threshold) {
        writeln!(out)?;
        writeln!(out, "{} ({} links):", redundant.target, redundant.link_count)?;
        for source in redundant.sources.iter().take(MAX_LISTED_SOURCES) {
            writeln!(out, "  - {}", source)?;
        }
        if redundant.sources.len() > MAX_LISTED_SOURCES {
            writeln!(
                out,
                "  ... and {} more",
                redundant.sources.len() - MAX_LISTED_SOURCES
            )?;
        }
    }

    // Documents with the most internal links
    section(out, "FILES WITH MOST LINKS")?;
    for file in results.top_files(options.top_files) {
        writeln!(
            out,
            "{}: {} links ({} valid, {} broken)",
            file.path,
            file.total_links(),
            file.valid_links(),
            file.broken_links()
        )?;
    }

    section(out, "AUDIT COMPLETE")?;
    Ok(())
}
