//! Block tag catalog.
//!
//! A block element marks a structural text boundary for fragment merging:
//! text nodes inside the same block are concatenated into one fragment, text
//! separated by a block boundary starts a new fragment. The set is a design
//! constant of the algorithm, not user-configurable; callers needing
//! different block semantics must pre- or post-process the markup.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags treated as block-level boundaries during the walk.
pub static BLOCK_TAGS: [&str; 11] = [
    "p", "div", "body", "td", "article", "main", "section", "h1", "h2", "h3", "li",
];

/// `BLOCK_TAGS` as a `HashSet` for O(1) lookup.
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// Check whether a tag name is block-level.
///
/// Tag names from the parser are already lowercase for HTML documents, but
/// comparison is done case-insensitively to be safe with foreign content.
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag.to_ascii_lowercase().as_str())
}
