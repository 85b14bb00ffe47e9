// src/report/audit.rs
// =============================================================================
// This module runs the scan and collects everything the report needs.
//
// How it works:
// 1. Visit every indexed document, one at a time, in lexical order
// 2. Read its text (a failed read is recorded and the scan moves on)
// 3. Extract links, resolve each one, and check internal ones against the index
// 4. File every link into AuditResults:
//      external / anchor   -> their own lists, never valid or broken
//      internal, exists    -> valid; grouped by target for redundancy
//      internal, missing   -> broken
//
// AuditResults starts empty, is filled during the single pass, and is only
// read afterwards by the renderer.
//
// Rust concepts:
// - BTreeMap: keeps targets sorted, so the report order is stable
// - Borrowing: the index and resolver are only read, never changed
// =============================================================================

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use crate::checker::{extract_links, LinkKind, PathResolver, ResolvedLink};
use crate::index::{Document, DocumentIndex};

// Outcome of checking one internal link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Valid,
    Broken,
    /// External and anchor links are never checked
    Unchecked,
}

// One link occurrence, after resolution and checking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Relative path of the linking document ("sub/page.md")
    pub source: String,
    pub label: String,
    /// Target exactly as written
    pub target: String,
    pub resolved: Option<String>,
    pub kind: LinkKind,
    pub line: usize,
    pub status: LinkStatus,
}

// What happened when a document was scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Internal links only (external and anchor links are kept globally)
    Scanned { links: Vec<LinkRecord> },
    /// The document could not be read
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn links(&self) -> &[LinkRecord] {
        match &self.outcome {
            FileOutcome::Scanned { links } => links.as_slice(),
            FileOutcome::Failed { .. } => &[],
        }
    }

    pub fn total_links(&self) -> usize {
        self.links().len()
    }

    pub fn valid_links(&self) -> usize {
        self.count(LinkStatus::Valid)
    }

    pub fn broken_links(&self) -> usize {
        self.count(LinkStatus::Broken)
    }

    pub fn is_scanned(&self) -> bool {
        matches!(self.outcome, FileOutcome::Scanned { .. })
    }

    fn count(&self, status: LinkStatus) -> usize {
        self.links().iter().filter(|l| l.status == status).count()
    }
}

// A target linked from many different documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedundantTarget<'a> {
    pub target: &'a str,
    /// Valid links pointing here, duplicates from one source included
    pub link_count: usize,
    /// Distinct linking documents, sorted
    pub sources: Vec<&'a str>,
}

// Everything gathered during one audit run
#[derive(Debug, Clone, Default)]
pub struct AuditResults {
    pub total_files: usize,
    pub total_links: usize,
    pub valid_links: usize,
    pub broken_links: Vec<LinkRecord>,
    pub external_links: Vec<LinkRecord>,
    pub anchor_links: Vec<LinkRecord>,
    /// Valid links grouped by resolved target
    pub targets: BTreeMap<String, Vec<LinkRecord>>,
    /// One entry per document, in scan order
    pub files: Vec<FileReport>,
}

impl AuditResults {
    pub fn new() -> Self {
        Self::default()
    }

    // Reads one document from disk and records its links
    //
    // A read error (I/O, invalid UTF-8) is recorded for this document only.
    pub fn scan_document(
        &mut self,
        doc: &Document,
        index: &DocumentIndex,
        resolver: &PathResolver,
    ) {
        match fs::read_to_string(&doc.path) {
            Ok(text) => self.scan_text(doc, &text, index, resolver),
            Err(e) => {
                warn!("audit"; "could not read {}: {}", doc.rel_path, e);
                self.record_failure(doc, e.to_string());
            }
        }
    }

    // Records the links found in `text`, the content of `doc`
    pub fn scan_text(
        &mut self,
        doc: &Document,
        text: &str,
        index: &DocumentIndex,
        resolver: &PathResolver,
    ) {
        self.total_files += 1;
        let mut file_links = Vec::new();

        for link in extract_links(text) {
            self.total_links += 1;

            let resolved = resolver.resolve(link.target, doc);
            let mut record = LinkRecord {
                source: doc.rel_path.clone(),
                label: link.label.to_string(),
                target: link.target.to_string(),
                resolved: resolved.path().map(str::to_string),
                kind: resolved.kind(),
                line: link.line,
                status: LinkStatus::Unchecked,
            };

            match &resolved {
                ResolvedLink::External => self.external_links.push(record),
                ResolvedLink::Anchor => self.anchor_links.push(record),
                ResolvedLink::Absolute(path) | ResolvedLink::Relative(path) => {
                    if index.exists(path) {
                        record.status = LinkStatus::Valid;
                        self.valid_links += 1;
                        self.targets
                            .entry(path.clone())
                            .or_default()
                            .push(record.clone());
                    } else {
                        record.status = LinkStatus::Broken;
                        self.broken_links.push(record.clone());
                    }
                    file_links.push(record);
                }
            }
        }

        log!("audit"; "{} -> {}: {} internal link(s)", doc.rel_path, doc.canonical, file_links.len());
        self.files.push(FileReport {
            path: doc.rel_path.clone(),
            outcome: FileOutcome::Scanned { links: file_links },
        });
    }

    // Records a document that could not be read; it still counts as a file
    pub fn record_failure(&mut self, doc: &Document, error: String) {
        self.total_files += 1;
        self.files.push(FileReport {
            path: doc.rel_path.clone(),
            outcome: FileOutcome::Failed { error },
        });
    }

    // Documents that could not be read, with the reason
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Failed { error } => Some((f.path.as_str(), error.as_str())),
            FileOutcome::Scanned { .. } => None,
        })
    }

    pub fn broken_count(&self) -> usize {
        self.broken_links.len()
    }

    // Broken links grouped by source document (sorted), in encounter order
    pub fn broken_by_source(&self) -> BTreeMap<&str, Vec<&LinkRecord>> {
        let mut grouped: BTreeMap<&str, Vec<&LinkRecord>> = BTreeMap::new();
        for link in &self.broken_links {
            grouped.entry(link.source.as_str()).or_default().push(link);
        }
        grouped
    }

    // Targets linked from at least `threshold` distinct documents, sorted by target
    pub fn redundant_targets(&self, threshold: usize) -> Vec<RedundantTarget<'_>> {
        self.targets
            .iter()
            .filter_map(|(target, links)| {
                let sources: BTreeSet<&str> = links.iter().map(|l| l.source.as_str()).collect();
                if sources.len() < threshold {
                    return None;
                }
                Some(RedundantTarget {
                    target,
                    link_count: links.len(),
                    sources: sources.into_iter().collect(),
                })
            })
            .collect()
    }

    // The `limit` readable documents with the most internal links
    //
    // Sorted by link count, highest first. The sort is stable, so ties keep
    // scan order (lexical by path).
    pub fn top_files(&self, limit: usize) -> Vec<&FileReport> {
        let mut ranked: Vec<&FileReport> = self.files.iter().filter(|f| f.is_scanned()).collect();
        ranked.sort_by(|a, b| b.total_links().cmp(&a.total_links()));
        ranked.truncate(limit);
        ranked
    }
}

// Scans every document in the index and returns the collected results
pub fn run_audit(index: &DocumentIndex, resolver: &PathResolver) -> AuditResults {
    let mut results = AuditResults::new();
    for doc in index.documents() {
        results.scan_document(doc, index, resolver);
    }
    results
}
