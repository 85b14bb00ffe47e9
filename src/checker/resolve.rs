// src/checker/resolve.rs
// =============================================================================
// This module turns a raw link target into a canonical document path.
//
// Links are written in several styles. All of them are mapped into the same
// path space the document index uses ("guide/intro", no extension):
//
//   https://example.com, mailto:x     -> external   (not resolved)
//   #section                          -> anchor     (not resolved)
//   /docs/guide/intro.md              -> absolute   "guide/intro"
//   /guide/intro                      -> absolute   "guide/intro"
//   ../guide/intro.md   (from a/b.md) -> relative   "guide/intro"
//   ./intro             (from a/b.md) -> relative   "a/intro"
//   intro               (from a/b.md) -> relative   "a/intro"
//
// Steps, in order:
// 1. Drop everything from the first '#' (fragments are never checked)
// 2. http://, https://, mailto: -> external
// 3. Raw target starting with '#' -> anchor
// 4. Drop a trailing ".md" (any letter case)
// 5. Classify by prefix and build the path (see resolve_in)
//
// Only "../" links get their ".." and "." segments collapsed. "./" and bare
// relative links are joined onto the source directory verbatim.
//
// Rust concepts:
// - Enums with data: each variant carries exactly what that kind needs
// - Exhaustive match: callers must handle every kind of link
// - String slices: most steps just narrow a &str, no allocation
// =============================================================================

use crate::index::{Document, DOC_EXTENSION};
use std::fmt;

// What kind of link a target is, without the resolved path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    External,
    Anchor,
    Absolute,
    Relative,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkKind::External => "external",
            LinkKind::Anchor => "anchor",
            LinkKind::Absolute => "absolute",
            LinkKind::Relative => "relative",
        };
        f.write_str(name)
    }
}

// The outcome of resolving one raw link target
//
// Internal links (absolute/relative) carry their canonical path; external
// and anchor links have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLink {
    External,
    Anchor,
    Absolute(String),
    Relative(String),
}

impl ResolvedLink {
    pub fn kind(&self) -> LinkKind {
        match self {
            ResolvedLink::External => LinkKind::External,
            ResolvedLink::Anchor => LinkKind::Anchor,
            ResolvedLink::Absolute(_) => LinkKind::Absolute,
            ResolvedLink::Relative(_) => LinkKind::Relative,
        }
    }

    // The canonical path, for internal links only
    pub fn path(&self) -> Option<&str> {
        match self {
            ResolvedLink::Absolute(path) | ResolvedLink::Relative(path) => Some(path.as_str()),
            ResolvedLink::External | ResolvedLink::Anchor => None,
        }
    }
}

const EXTERNAL_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

// Resolves link targets against the document tree
//
// The only state is the root-absolute prefix ("/docs/" by default), which
// marks links written relative to the site root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root_prefix: String,
}

impl PathResolver {
    pub fn new(root_marker: &str) -> Self {
        PathResolver {
            root_prefix: format!("/{}/", root_marker.trim_matches('/')),
        }
    }

    /// Resolves `raw` as written inside the document `source`.
    pub fn resolve(&self, raw: &str, source: &Document) -> ResolvedLink {
        self.resolve_in(raw, source.source_dir())
    }

    // Same as resolve(), with the source document given by its directory
    //
    // Parameters:
    //   raw: the link target exactly as written, e.g. "../a.md#top"
    //   source_dir: directory of the linking document relative to the root,
    //               "" for documents at the root
    pub fn resolve_in(&self, raw: &str, source_dir: &str) -> ResolvedLink {
        let target = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        if EXTERNAL_SCHEMES.iter().any(|scheme| target.starts_with(scheme)) {
            return ResolvedLink::External;
        }

        if raw.starts_with('#') {
            return ResolvedLink::Anchor;
        }

        let target = strip_doc_extension(target);

        if let Some(rest) = target.strip_prefix(self.root_prefix.as_str()) {
            return ResolvedLink::Absolute(rest.to_string());
        }

        if let Some(rest) = target.strip_prefix("./") {
            ResolvedLink::Relative(join_dir(source_dir, rest))
        } else if target.starts_with("../") {
            ResolvedLink::Relative(collapse_segments(source_dir, target))
        } else if let Some(rest) = target.strip_prefix('/') {
            ResolvedLink::Absolute(rest.to_string())
        } else {
            ResolvedLink::Relative(join_dir(source_dir, target))
        }
    }
}

// "guide.md" / "guide.MD" -> "guide"; anything else is left alone
fn strip_doc_extension(target: &str) -> &str {
    let suffix_len = DOC_EXTENSION.len() + 1;
    if target.len() < suffix_len {
        return target;
    }
    let split = target.len() - suffix_len;
    match target.get(split..) {
        Some(tail) if tail.starts_with('.') && tail[1..].eq_ignore_ascii_case(DOC_EXTENSION) => {
            &target[..split]
        }
        _ => target,
    }
}

// Joins without normalizing: ("a", "x/../y") -> "a/x/../y"
fn join_dir(dir: &str, rest: &str) -> String {
    if dir.is_empty() {
        rest.to_string()
    } else {
        format!("{}/{}", dir, rest)
    }
}

// Walks `target` segment by segment on top of `dir`, like `cd` would
//
// ".." pops a segment (popping past the root is a no-op), "." and empty
// segments are skipped, anything else is pushed.
//
// Example: ("a/b/c", "../../x") -> "a/x"
fn collapse_segments(dir: &str, target: &str) -> String {
    let mut stack: Vec<&str> = if dir.is_empty() {
        Vec::new()
    } else {
        dir.split('/').collect()
    };

    for segment in target.split('/') {
        match segment {
            ".." => {
                stack.pop();
            }
            "." | "" => {}
            other => stack.push(other),
        }
    }

    stack.join("/")
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why does resolve_in never fail?
//    - Every string has a classification; a path that points nowhere is
//      still a valid *resolution*, it just won't exist in the index
//    - Broken links are reported, not raised as errors
//
// 2. Why match on segment strings directly?
//    - `match segment { ".." => ..., "." | "" => ... }` compares &str values
//    - It reads like the rules themselves and the compiler checks the arms
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PathResolver {
        PathResolver::new("docs")
    }

    #[test]
    fn test_external_links() {
        let r = resolver();
        assert_eq!(r.resolve_in("https://example.com", ""), ResolvedLink::External);
        assert_eq!(r.resolve_in("http://example.com/a.md", "x"), ResolvedLink::External);
        assert_eq!(r.resolve_in("mailto:me@example.com", ""), ResolvedLink::External);
    }

    #[test]
    fn test_anchor_links() {
        let r = resolver();
        assert_eq!(r.resolve_in("#top", "a"), ResolvedLink::Anchor);
        assert_eq!(r.resolve_in("#", ""), ResolvedLink::Anchor);
    }

    #[test]
    fn test_fragment_is_dropped() {
        let r = resolver();
        assert_eq!(
            r.resolve_in("guide.md#setup", "a"),
            ResolvedLink::Relative("a/guide".to_string())
        );
        assert_eq!(
            r.resolve_in("https://example.com#x", ""),
            ResolvedLink::External
        );
    }

    #[test]
    fn test_root_absolute_prefix() {
        let r = resolver();
        assert_eq!(
            r.resolve_in("/docs/a/b.md", "deep/dir"),
            ResolvedLink::Absolute("a/b".to_string())
        );
        // Used as-is, no segment collapsing
        assert_eq!(
            r.resolve_in("/docs/a/../b", ""),
            ResolvedLink::Absolute("a/../b".to_string())
        );
    }

    #[test]
    fn test_plain_absolute_path() {
        let r = resolver();
        assert_eq!(
            r.resolve_in("/a/b", "x"),
            ResolvedLink::Absolute("a/b".to_string())
        );
    }

    #[test]
    fn test_root_absolute_and_bare_relative_agree_at_root() {
        let r = resolver();
        let absolute = r.resolve_in("/docs/a/b", "");
        let relative = r.resolve_in("a/b", "");
        assert_eq!(absolute.path(), Some("a/b"));
        assert_eq!(relative.path(), Some("a/b"));
    }

    #[test]
    fn test_dot_slash_ignores_extension() {
        let r = resolver();
        let with_ext = r.resolve_in("./sibling.md", "a");
        let upper_ext = r.resolve_in("./sibling.MD", "a");
        let without = r.resolve_in("./sibling", "a");
        assert_eq!(with_ext, ResolvedLink::Relative("a/sibling".to_string()));
        assert_eq!(with_ext, without);
        assert_eq!(upper_ext, without);
    }

    #[test]
    fn test_dot_slash_at_root() {
        let r = resolver();
        assert_eq!(
            r.resolve_in("./x", ""),
            ResolvedLink::Relative("x".to_string())
        );
    }

    #[test]
    fn test_parent_links_collapse() {
        let r = resolver();
        assert_eq!(r.resolve_in("../../x", "a/b/c").path(), Some("a/x"));
        assert_eq!(r.resolve_in("../x/./y//z", "a").path(), Some("x/y/z"));
    }

    #[test]
    fn test_parent_links_stop_at_root() {
        let r = resolver();
        assert_eq!(r.resolve_in("../../../../x", "a/b/c").path(), Some("x"));
        assert_eq!(r.resolve_in("../", "").path(), Some(""));
    }

    #[test]
    fn test_only_parent_links_collapse() {
        // "./" and bare relative links keep their ".." segments verbatim
        let r = resolver();
        assert_eq!(r.resolve_in("./x/../y", "a").path(), Some("a/x/../y"));
        assert_eq!(r.resolve_in("x/../y", "a").path(), Some("a/x/../y"));
    }

    #[test]
    fn test_extension_only_stripped_at_end() {
        let r = resolver();
        assert_eq!(r.resolve_in("a.md/b", "").path(), Some("a.md/b"));
        assert_eq!(r.resolve_in("notes.mdx", "").path(), Some("notes.mdx"));
        assert_eq!(r.resolve_in(".md", "d").path(), Some("d/"));
    }

    #[test]
    fn test_custom_root_marker() {
        let r = PathResolver::new("handbook");
        assert_eq!(r.resolve_in("/handbook/a", "").kind(), LinkKind::Absolute);
        assert_eq!(r.resolve_in("/handbook/a", "").path(), Some("a"));
        assert_eq!(r.resolve_in("/docs/a", "").path(), Some("docs/a"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(LinkKind::External.to_string(), "external");
        assert_eq!(LinkKind::Relative.to_string(), "relative");
    }
}
