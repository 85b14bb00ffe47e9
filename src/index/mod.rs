// src/index/mod.rs
// =============================================================================
// This module knows which documents exist under the document root.
//
// Submodules:
// - documents: Walks the root and registers every markdown file under
//   several equivalent lookup keys ("aliases")
// - exists: Answers "does this resolved link path point at a document?"
//
// The index is built once at startup and never changes afterwards. Every
// later stage only borrows it.
// =============================================================================

mod documents;
mod exists;

pub use documents::{build_index, Document, DocumentIndex, DOC_EXTENSION};
