//! Grouped text extraction.
//!
//! Pipeline for one call: parse, detach excluded subtrees, resolve root
//! containers, resolve group anchors, walk each root subtree bucketing text
//! fragments per group, normalize whitespace. The document is private to the
//! call and discarded at the end; group anchors are surfaced to the caller as
//! element snapshots.

use std::collections::HashMap;

use dom_query::{Document, NodeId, NodeRef, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{NEWLINE_RUNS, SPACE_RUNS, TAB_RUNS};
use crate::result::{GroupContent, GroupedText, TextGroup};
use crate::selector::Selector;
use crate::tags::is_block_tag;

/// Collapse duplicated line breaks, spaces and tabs, and strip the result.
///
/// Any whitespace run containing a newline becomes a single newline, so
/// spaces and tabs hugging a line break disappear with it. Remaining space
/// runs collapse to one space, tab runs to one tab. Idempotent: normalizing
/// an already-normalized string is a no-op.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let text = NEWLINE_RUNS.replace_all(text, "\n");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = TAB_RUNS.replace_all(&text, "\t");
    text.trim().to_string()
}

/// Buckets of raw text fragments keyed by group anchor identity.
///
/// Registration order is preserved for the output; first registration of a
/// node wins, re-registration is a no-op.
struct GroupRegistry<'a> {
    order: Vec<NodeRef<'a>>,
    buckets: HashMap<NodeId, Vec<String>>,
}

impl<'a> GroupRegistry<'a> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    fn register(&mut self, node: NodeRef<'a>) {
        if !self.buckets.contains_key(&node.id) {
            self.buckets.insert(node.id, Vec::new());
            self.order.push(node);
        }
    }

    fn is_registered(&self, id: NodeId) -> bool {
        self.buckets.contains_key(&id)
    }

    fn bucket_mut(&mut self, id: NodeId) -> Option<&mut Vec<String>> {
        self.buckets.get_mut(&id)
    }

    fn into_result(mut self, options: &Options) -> GroupedText {
        let mut groups = Vec::with_capacity(self.order.len());

        for node in self.order {
            let fragments = self.buckets.remove(&node.id).unwrap_or_default();
            let content = if options.join_texts {
                GroupContent::Joined(normalize_whitespace(
                    &fragments.join(&options.join_separator),
                ))
            } else {
                GroupContent::Fragments(
                    fragments
                        .iter()
                        .map(|fragment| normalize_whitespace(fragment))
                        .collect(),
                )
            };

            let sel = Selection::from(node);
            groups.push(TextGroup {
                tag: dom::tag_name(&sel),
                attributes: dom::get_all_attributes(&sel),
                content,
            });
        }

        GroupedText { groups }
    }
}

/// Run the full extraction pipeline over an HTML string.
pub(crate) fn extract_grouped(html: &str, options: &Options) -> Result<GroupedText> {
    let doc = dom::parse(html);
    if doc.select("html").is_empty() {
        return Err(Error::ParseError("no document root".to_string()));
    }

    // Removal happens before anything else so that detached content never
    // contributes text or participates in root/group resolution.
    remove_excluded(&doc, &options.remove_elements);

    let roots = resolve_roots(&doc, &options.element_filters);

    let mut registry = GroupRegistry::new();
    if options.element_groupers.is_empty() {
        for root in &roots {
            registry.register(*root);
        }
    } else {
        for grouper in &options.element_groupers {
            for node in grouper.matches(&doc) {
                registry.register(node);
            }
        }
    }

    for root in &roots {
        walk_root(*root, &mut registry);
    }

    Ok(registry.into_result(options))
}

/// Detach every subtree matched by the caller's removers plus the always-on
/// `script` selector.
fn remove_excluded(doc: &Document, removers: &[Selector]) {
    let mut selectors = removers.to_vec();
    selectors.push(Selector::tag("script"));

    for node in Selector::match_many(doc, &selectors) {
        dom::remove(&Selection::from(node));
    }
}

/// Resolve root containers: caller filters, or the document body.
fn resolve_roots<'a>(doc: &'a Document, filters: &[Selector]) -> Vec<NodeRef<'a>> {
    if filters.is_empty() {
        Selector::match_many(doc, &[Selector::tag("body")])
    } else {
        Selector::match_many(doc, filters)
    }
}

/// Depth-first pre-order walk over one root subtree, the root itself first.
///
/// State per root: `last_block` is the most recently entered block element
/// (initially the root), `last_group` the most recently entered registered
/// group anchor, `new_block` whether a block boundary was crossed since the
/// last fragment was recorded. Block tracking is updated before group
/// tracking, and both before the text eligibility check.
fn walk_root(root: NodeRef, registry: &mut GroupRegistry) {
    let mut last_block = root;
    let mut last_group: Option<NodeId> = None;
    let mut new_block = false;

    for current in std::iter::once(root).chain(root.descendants()) {
        if current.is_element() {
            if current.node_name().is_some_and(|tag| is_block_tag(&tag)) {
                last_block = current;
                new_block = true;
                if registry.is_registered(current.id) {
                    last_group = Some(current.id);
                }
            }
            continue;
        }

        if !current.is_text() {
            continue;
        }
        let text = current.text();
        if text.is_empty() {
            continue;
        }

        // The text merges into the previous fragment only when some block
        // ancestor is identical to `last_block`. A nearest block ancestor
        // that is not `last_block` means a distinct nested block boundary,
        // which always starts a new fragment.
        let same_block = current.ancestors(None).iter().any(|ancestor| {
            ancestor.id == last_block.id
                && ancestor.node_name().is_some_and(|tag| is_block_tag(&tag))
        });

        // Text is recorded only when a group anchor has been entered and the
        // text sits inside that anchor's subtree.
        let Some(group_id) = last_group else {
            continue;
        };
        if !current.ancestors(None).iter().any(|a| a.id == group_id) {
            continue;
        }
        let Some(bucket) = registry.bucket_mut(group_id) else {
            continue;
        };

        if same_block && !new_block {
            if let Some(last_fragment) = bucket.last_mut() {
                last_fragment.push_str(&text);
                continue;
            }
        }
        bucket.push(text.to_string());
        new_block = false;
    }
}
