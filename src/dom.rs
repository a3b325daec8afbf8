//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate, keeping the call sites in the
//! selector and extraction code free of parser-specific plumbing. Parsing is
//! best-effort: however degraded the markup, the returned tree is treated as
//! valid input by the rest of the crate.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get the tag name (lowercase) of the first node in a selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all attributes as key-value pairs.
///
/// Returns an empty vector if the node has no attributes or the selection is
/// empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Detach nodes from the tree, subtree included. Idempotent on already
/// detached or empty selections.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_tag_name() {
        let doc = parse(r#"<article><section>content</section></article>"#);

        assert_eq!(tag_name(&doc.select("article")), Some("article".to_string()));
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
    }

    #[test]
    fn test_get_attribute() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div#main");

        assert_eq!(get_attribute(&div, "class"), Some("container".to_string()));
        assert_eq!(get_attribute(&div, "data-test"), None);
    }

    #[test]
    fn test_get_all_attributes() {
        let doc = parse(r#"<a href="/x" class="link" title="Example">Link</a>"#);
        let attrs = get_all_attributes(&doc.select("a"));

        assert_eq!(attrs.len(), 3);
        assert!(attrs.iter().any(|(k, v)| k == "href" && v == "/x"));
        assert!(attrs.iter().any(|(k, v)| k == "class" && v == "link"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let doc = parse(r#"<div><span class="ad">ad</span><p>content</p></div>"#);

        remove(&doc.select(".ad"));
        remove(&doc.select(".ad"));

        assert!(doc.select(".ad").is_empty());
        assert!(!doc.select("p").is_empty());
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let doc = parse("<div><p>unclosed");
        assert_eq!(doc.select("p").text(), "unclosed".into());
    }
}
