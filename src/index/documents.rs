// src/index/documents.rs
// =============================================================================
// This module builds the document index.
//
// How it works:
// 1. Walk the document root recursively (serial walk, sorted afterwards)
// 2. Keep every file whose extension is exactly "md" (case matters)
// 3. Turn its path into a canonical path: relative to the root, extension
//    removed, one trailing space trimmed ("guide/intro.md" -> "guide/intro")
// 4. Register the canonical path under several alias keys, all pointing at
//    the same document:
//      guide/intro         bare canonical path
//      /docs/guide/intro   root-prefixed
//      docs/guide/intro    root marker without the leading slash
//    ("docs" is the configurable root marker)
//
// Links are written in all of these styles; the existence check is a plain
// map lookup against these keys.
//
// Rust concepts:
// - HashMap: alias -> position in the document list
// - Iterator adapters: filter/map over the directory walk
// =============================================================================

use anyhow::{bail, Result};
use jwalk::{Parallelism, WalkDir};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Extension (without the dot) a file must have to count as a document.
pub const DOC_EXTENSION: &str = "md";

/// Name of the document that stands in for its directory.
pub const INDEX_DOCUMENT: &str = "README";

/// One markdown file found under the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the root, extension kept ("sub/page.md")
    pub rel_path: String,
    /// Path relative to the root, extension stripped ("sub/page")
    pub canonical: String,
    /// Location on disk
    pub path: PathBuf,
}

impl Document {
    // Directory of the document relative to the root ("" at the root)
    pub fn source_dir(&self) -> &str {
        match self.rel_path.rfind('/') {
            Some(pos) => &self.rel_path[..pos],
            None => "",
        }
    }
}

// All documents under the root, plus every alias they can be looked up by
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    root_marker: String,
    aliases: HashMap<String, usize>,
    documents: Vec<Document>,
}

impl DocumentIndex {
    // Creates an empty index; `root_marker` is "docs" unless configured
    pub fn new(root_marker: &str) -> Self {
        DocumentIndex {
            root_marker: root_marker.trim_matches('/').to_string(),
            aliases: HashMap::new(),
            documents: Vec::new(),
        }
    }

    // Registers one document under all of its alias keys
    //
    // Parameters:
    //   rel_path: path relative to the root using '/' separators, with extension
    //   path: where the file lives on disk
    pub fn insert(&mut self, rel_path: String, path: PathBuf) {
        let canonical = canonical_path(&rel_path);
        let id = self.documents.len();

        for alias in self.alias_keys(&canonical) {
            self.aliases.insert(alias, id);
        }

        self.documents.push(Document {
            rel_path,
            canonical,
            path,
        });
    }

    // The alias keys a canonical path is registered under
    fn alias_keys(&self, canonical: &str) -> Vec<String> {
        let mut keys = vec![
            canonical.to_string(),
            format!("/{}/{}", self.root_marker, canonical),
            format!("{}/{}", self.root_marker, canonical),
        ];
        if let Some(stripped) = canonical.strip_prefix('/') {
            keys.push(stripped.to_string());
        }
        keys
    }

    /// Looks up the document registered under `alias`, if any.
    pub fn lookup(&self, alias: &str) -> Option<&Document> {
        self.aliases.get(alias).map(|&id| &self.documents[id])
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.lookup(alias).is_some()
    }

    pub fn root_marker(&self) -> &str {
        &self.root_marker
    }

    /// Documents in scan order (lexical by relative path).
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

// Walks `root` and indexes every markdown document below it
//
// Returns: the index, which may be empty (that is not an error)
// Errors: if `root` does not exist or is not a directory
pub fn build_index(root: &Path, root_marker: &str) -> Result<DocumentIndex> {
    if !root.is_dir() {
        bail!("Document root not found or not a directory: {}", root.display());
    }

    // Serial walk; the final order comes from sorting relative paths below
    let mut files: Vec<(String, PathBuf)> = WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .sort(true)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        // Symlinked files count (their target is a file), but symlinked
        // directories are not descended into
        .filter(|e| {
            let kind = e.file_type();
            kind.is_file() || (kind.is_symlink() && e.path().is_file())
        })
        .map(|e| e.path())
        .filter(|p| is_document(p))
        .filter_map(|p| relative_path(root, &p).map(|rel| (rel, p)))
        .collect();

    // Lexical by relative path, so runs over the same tree scan in the same order
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut index = DocumentIndex::new(root_marker);
    for (rel_path, path) in files {
        index.insert(rel_path, path);
    }

    Ok(index)
}

// Matches like a "*.md" glob, so a file named just ".md" counts too
// (its canonical path is "")
fn is_document(path: &Path) -> bool {
    let suffix = format!(".{}", DOC_EXTENSION);
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix.as_str()))
}

// "root/sub/page.md" -> "sub/page.md", always with '/' separators
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

// "sub/page.md" -> "sub/page", and "notes .md" -> "notes"
fn canonical_path(rel_path: &str) -> String {
    let suffix = format!(".{}", DOC_EXTENSION);
    let stem = rel_path.strip_suffix(suffix.as_str()).unwrap_or(rel_path);
    stem.strip_suffix(' ').unwrap_or(stem).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_canonical_path_strips_extension_and_trailing_space() {
        assert_eq!(canonical_path("sub/page.md"), "sub/page");
        assert_eq!(canonical_path("notes .md"), "notes");
        assert_eq!(canonical_path("README.md"), "README");
    }

    #[test]
    fn test_registers_all_alias_forms() {
        let mut index = DocumentIndex::new("docs");
        index.insert("guide/intro.md".to_string(), PathBuf::from("x/guide/intro.md"));

        for alias in ["guide/intro", "/docs/guide/intro", "docs/guide/intro"] {
            let doc = index.lookup(alias).expect(alias);
            assert_eq!(doc.rel_path, "guide/intro.md");
        }
        assert!(!index.contains("guide/intro.md"));
    }

    #[test]
    fn test_custom_root_marker() {
        let mut index = DocumentIndex::new("/handbook/");
        index.insert("a.md".to_string(), PathBuf::from("a.md"));
        assert!(index.contains("/handbook/a"));
        assert!(index.contains("handbook/a"));
        assert!(!index.contains("/docs/a"));
    }

    #[test]
    fn test_build_index_walks_recursively() {
        let dir = TempDir::new().unwrap();
        write(&dir, "root.md", "");
        write(&dir, "sub/page.md", "");
        write(&dir, "sub/deeper/leaf.md", "");
        write(&dir, "sub/image.png", "");
        write(&dir, "UPPER.MD", "");

        let index = build_index(dir.path(), "docs").unwrap();
        let rel: Vec<_> = index.documents().iter().map(|d| d.rel_path.as_str()).collect();
        assert_eq!(rel, vec!["root.md", "sub/deeper/leaf.md", "sub/page.md"]);
        assert!(index.contains("sub/deeper/leaf"));
        assert!(index.lookup("UPPER").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_index_includes_symlinked_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "real.md", "");
        std::os::unix::fs::symlink(dir.path().join("real.md"), dir.path().join("alias.md")).unwrap();

        let index = build_index(dir.path(), "docs").unwrap();
        let rel: Vec<_> = index.documents().iter().map(|d| d.rel_path.as_str()).collect();
        assert_eq!(rel, vec!["alias.md", "real.md"]);
        assert!(index.exists("alias"));
    }

    #[cfg(unix)]
    #[test]
    fn test_build_index_skips_symlinked_directories() {
        let dir = TempDir::new().unwrap();
        write(&dir, "guide/intro.md", "");
        std::os::unix::fs::symlink(dir.path().join("guide"), dir.path().join("mirror")).unwrap();

        let index = build_index(dir.path(), "docs").unwrap();
        assert_eq!(index.len(), 1);
        assert!(!index.contains("mirror/intro"));
    }

    #[test]
    fn test_bare_extension_file_is_a_document() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".md", "");
        write(&dir, "notes.mdx", "");

        let index = build_index(dir.path(), "docs").unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.documents()[0].rel_path, ".md");
        assert_eq!(index.documents()[0].canonical, "");
        assert!(index.contains("/docs/"));
    }

    #[test]
    fn test_build_index_empty_root() {
        let dir = TempDir::new().unwrap();
        let index = build_index(dir.path(), "docs").unwrap();
        assert!(index.is_empty());
        assert!(!index.contains(""));
    }

    #[test]
    fn test_build_index_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let result = build_index(&dir.path().join("nope"), "docs");
        assert!(result.is_err());
    }

    #[test]
    fn test_source_dir() {
        let mut index = DocumentIndex::new("docs");
        index.insert("a/b/c.md".to_string(), PathBuf::from("c.md"));
        index.insert("top.md".to_string(), PathBuf::from("top.md"));
        assert_eq!(index.lookup("a/b/c").unwrap().source_dir(), "a/b");
        assert_eq!(index.lookup("top").unwrap().source_dir(), "");
    }
}
