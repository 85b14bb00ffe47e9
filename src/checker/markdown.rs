// src/checker/markdown.rs
// =============================================================================
// This module extracts inline links from raw Markdown text.
//
// We match the text directly with a regex instead of running a full Markdown
// parser. The grammar is deliberately simple:
//
//   [label](target)
//
// - label: one or more characters, none of them ']'
// - target: one or more characters, none of them ')'
// - the first ']' closes the label, the first ')' after it closes the target
//
// Anything fancier (nested brackets, titles, angle-bracket targets) is not
// special-cased; it matches or fails exactly by the rule above. Links inside
// code blocks are found too.
//
// Each link remembers the 1-based line on which it *starts*.
//
// Rust concepts:
// - Iterators: links come out lazily, one at a time, in document order
// - Lifetimes: the extracted label/target borrow from the document text
// - LazyLock: compile the regex once, on first use
// =============================================================================

use regex::{CaptureMatches, Regex};
use std::sync::LazyLock;

// The pattern is a constant known to be valid, so compiling it can't fail
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

// One [label](target) occurrence in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedLink<'a> {
    pub label: &'a str,
    pub target: &'a str,
    pub line: usize,
}

// Iterator over the links of one document (see extract_links)
pub struct Links<'a> {
    text: &'a str,
    matches: CaptureMatches<'static, 'a>,
    // Byte offset we have counted newlines up to, and the line it is on
    counted_to: usize,
    line: usize,
}

impl<'a> Iterator for Links<'a> {
    type Item = ExtractedLink<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.matches.next()?;
        let whole = caps.get(0)?;

        // Matches come in increasing order, so only count the new stretch
        let start = whole.start();
        self.line += self.text.as_bytes()[self.counted_to..start]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.counted_to = start;

        Some(ExtractedLink {
            label: caps.get(1)?.as_str(),
            target: caps.get(2)?.as_str(),
            line: self.line,
        })
    }
}

// Extracts all inline links from Markdown text
//
// Parameters:
//   text: the raw document text (borrowed as &str)
//
// Returns: a lazy iterator of links in document order
//
// Example input:
//   "intro\nSee [Guide](../guide.md#setup)"
//
// Example output:
//   ExtractedLink { label: "Guide", target: "../guide.md#setup", line: 2 }
pub fn extract_links(text: &str) -> Links<'_> {
    Links {
        text,
        matches: LINK_PATTERN.captures_iter(text),
        counted_to: 0,
        line: 1,
    }
}
