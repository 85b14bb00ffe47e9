// src/index/exists.rs
// =============================================================================
// Existence check: does a resolved link path name a known document?
//
// A resolved path counts as existing when any of these is a registered alias:
//   <path>
//   /docs/<path>
//   docs/<path>
//   <path>/README      (directory link, only if <path> doesn't already
//                       end in "/README")
//
// A path that already ends in "/README" gets no directory fallback, so
// "guide/README" only exists if that exact document does.
// =============================================================================

use super::documents::{DocumentIndex, INDEX_DOCUMENT};

impl DocumentIndex {
    // Checks whether `resolved` points at a document in the index
    //
    // Empty paths never exist. No fuzzy or partial matching is attempted.
    pub fn exists(&self, resolved: &str) -> bool {
        if resolved.is_empty() {
            return false;
        }

        let marker = self.root_marker();
        let direct = [
            resolved.to_string(),
            format!("/{}/{}", marker, resolved),
            format!("{}/{}", marker, resolved),
        ];
        if direct.iter().any(|alias| self.contains(alias)) {
            return true;
        }

        let index_suffix = format!("/{}", INDEX_DOCUMENT);
        if !resolved.ends_with(&index_suffix) {
            return self.contains(&format!("{}{}", resolved, index_suffix));
        }

        false
    }
}
