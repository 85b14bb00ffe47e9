// src/checker/mod.rs
// =============================================================================
// This module contains the per-link logic.
//
// Submodules:
// - markdown: Finds [label](target) links in raw document text
// - resolve: Classifies a target and maps it onto a canonical document path
//
// Whether a resolved path actually exists is answered by the document index
// (see src/index/), since only the index knows which documents are there.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod markdown;
mod resolve;

// Re-export public items from submodules
// This lets callers write `checker::extract_links()` instead of
// `checker::markdown::extract_links()`
pub use markdown::extract_links;
pub use resolve::{LinkKind, PathResolver, ResolvedLink};
