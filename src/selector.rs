//! Declarative element selectors.
//!
//! A [`Selector`] is a predicate over the parsed tree: an optional tag name
//! (absence means any tag) plus attribute equality constraints (absence means
//! no constraint). Selectors enumerate their matching elements in document
//! order; several selectors combine by union, deduplicated by node identity.
//!
//! The union keeps first-seen order so that downstream resolution in the
//! extractor is deterministic, but callers must not rely on any particular
//! order from the union itself.

use std::collections::HashSet;

use dom_query::{Document, NodeRef, Selection};

use crate::dom;

/// A tag-name / attribute query over a parsed document.
///
/// Immutable value; an empty or overly strict selector simply yields an
/// empty match set, never an error.
///
/// # Example
///
/// ```rust
/// use rs_textractor::Selector;
///
/// let scripts = Selector::tag("script");
/// let sidebar = Selector::attr("class", "sidebar");
/// let nav_div = Selector::tag("div").with_attr("role", "navigation");
/// # let _ = (scripts, sidebar, nav_div);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag_name: Option<String>,
    attrs: Vec<(String, String)>,
}

impl Selector {
    /// Selector matching every element.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Selector matching elements by tag name (case-insensitive).
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(name.into()),
            attrs: Vec::new(),
        }
    }

    /// Selector matching elements carrying an attribute with the exact value.
    #[must_use]
    pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_name: None,
            attrs: vec![(name.into(), value.into())],
        }
    }

    /// Add a further attribute equality constraint.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Enumerate every element in the document satisfying this selector,
    /// in document order.
    #[must_use]
    pub fn matches<'a>(&self, doc: &'a Document) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        let Some(html_root) = doc.select("html").nodes().first().copied() else {
            return out;
        };

        for node in std::iter::once(html_root).chain(html_root.descendants()) {
            if !node.is_element() {
                continue;
            }
            if let Some(wanted) = &self.tag_name {
                let tag_matches = node
                    .node_name()
                    .is_some_and(|tag| tag.eq_ignore_ascii_case(wanted));
                if !tag_matches {
                    continue;
                }
            }
            if self.attrs_match(node) {
                out.push(node);
            }
        }

        out
    }

    fn attrs_match(&self, node: NodeRef) -> bool {
        let sel = Selection::from(node);
        self.attrs
            .iter()
            .all(|(name, value)| dom::get_attribute(&sel, name).is_some_and(|v| v == *value))
    }

    /// Apply each selector and union the results, deduplicated by node
    /// identity. First occurrence wins the slot in the returned order.
    #[must_use]
    pub fn match_many<'a>(doc: &'a Document, selectors: &[Selector]) -> Vec<NodeRef<'a>> {
        let mut seen: HashSet<dom_query::NodeId> = HashSet::new();
        let mut union = Vec::new();

        for selector in selectors {
            for node in selector.matches(doc) {
                if seen.insert(node.id) {
                    union.push(node);
                }
            }
        }

        union
    }
}
