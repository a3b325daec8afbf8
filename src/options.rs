//! Configuration options for text extraction.
//!
//! The `Options` struct controls which parts of the document are scanned,
//! which subtrees are removed, how text is grouped, and how fragments are
//! joined.

use crate::selector::Selector;

/// Configuration options for text extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_textractor::{Options, Selector};
///
/// // Use defaults: scan the body, one group per root, list output
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     element_filters: vec![Selector::tag("article")],
///     join_texts: true,
///     ..Options::default()
/// };
/// # let _ = options;
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Root containers to scan for text. Only text inside these subtrees is
    /// considered.
    ///
    /// Default: empty, meaning the document `body`.
    pub element_filters: Vec<Selector>,

    /// Subtrees to detach before any other processing. A selector for
    /// `script` elements is always applied in addition to this list.
    ///
    /// Default: empty
    pub remove_elements: Vec<Selector>,

    /// Group anchors. Each matched element gets its own bucket of fragments;
    /// text outside every anchor's subtree is dropped.
    ///
    /// Default: empty, meaning one group per root container.
    pub element_groupers: Vec<Selector>,

    /// Join each group's fragments into a single string.
    ///
    /// Default: `false`
    pub join_texts: bool,

    /// Separator used when `join_texts` is set.
    ///
    /// Default: `"\n"`
    pub join_separator: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            element_filters: Vec::new(),
            remove_elements: Vec::new(),
            element_groupers: Vec::new(),
            join_texts: false,
            join_separator: "\n".to_string(),
        }
    }
}
