//! # rs-textractor
//!
//! Grouped text extraction from HTML.
//!
//! This library pulls human-readable text out of noisy markup, grouped by
//! structural region (the document body by default, or caller-selected
//! container elements). Adjacent text fragments inside the same block-level
//! element are merged into one fragment; whitespace is collapsed and
//! stripped. The intended consumer needs clean, de-duplicated text for
//! search indexing or summarization, not a rendered page.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_textractor::extract;
//!
//! let html = "<body><p>Hello</p><p>World</p></body>";
//! let result = extract(html)?;
//!
//! let body = result.by_tag("body");
//! assert!(body.is_some());
//! # Ok::<(), rs_textractor::Error>(())
//! ```
//!
//! ## Grouping
//!
//! Supply `element_groupers` to bucket text by container instead of by root;
//! anything outside the groups is dropped:
//!
//! ```rust
//! use rs_textractor::{extract_with_options, Options, Selector};
//!
//! let html = r#"<div class="a"><p>One</p></div><div class="b"><p>Two</p></div>"#;
//! let options = Options {
//!     element_groupers: vec![
//!         Selector::attr("class", "a"),
//!         Selector::attr("class", "b"),
//!     ],
//!     ..Options::default()
//! };
//! let result = extract_with_options(html, &options)?;
//! assert_eq!(result.len(), 2);
//! # Ok::<(), rs_textractor::Error>(())
//! ```
//!
//! `<script>` content is always removed, even with no configured removers.

mod error;
mod extract;
mod options;
mod patterns;
mod result;
mod selector;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Block tag catalog used for fragment boundaries.
pub mod tags;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::normalize_whitespace;
pub use options::Options;
pub use result::{GroupContent, GroupedText, TextGroup};
pub use selector::Selector;

/// Extracts grouped text from an HTML document using default options.
///
/// Defaults: the document body is both the root container and the single
/// group; script elements are removed; fragments are returned as a list.
///
/// # Example
///
/// ```rust
/// use rs_textractor::extract;
///
/// let result = extract("<body><p>Hello <b>there</b></p></body>")?;
/// let body = result.by_tag("body");
/// assert!(body.is_some());
/// # Ok::<(), rs_textractor::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<GroupedText> {
    extract_with_options(html, &Options::default())
}

/// Extracts grouped text from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_textractor::{extract_with_options, Options};
///
/// let options = Options {
///     join_texts: true,
///     join_separator: " ".to_string(),
///     ..Options::default()
/// };
/// let result = extract_with_options("<body><p>Hello</p><p>World</p></body>", &options)?;
/// # Ok::<(), rs_textractor::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<GroupedText> {
    extract::extract_grouped(html, options)
}

/// Extracts grouped text from HTML bytes with automatic encoding detection.
///
/// The charset is detected from `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" ...>` declarations, defaulting to UTF-8.
/// Invalid characters are replaced rather than causing errors.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<GroupedText> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str)
}

/// Extracts grouped text from HTML bytes with custom options and automatic
/// encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<GroupedText> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
