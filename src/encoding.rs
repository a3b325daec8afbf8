//! Character encoding detection and transcoding.
//!
//! The bytes entry points accept raw documents in whatever encoding the
//! server produced. The charset is sniffed from meta declarations in the
//! document head and the bytes are decoded to UTF-8 before extraction,
//! replacing invalid sequences instead of failing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Only the first 1 KiB is scanned for charset declarations.
const SNIFF_WINDOW: usize = 1024;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Detect the character encoding declared by an HTML byte stream.
///
/// `<meta charset>` takes precedence over the `http-equiv` form; unknown
/// labels and missing declarations fall back to UTF-8, the web default.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);

    for pattern in [&META_CHARSET, &HTTP_EQUIV_CHARSET] {
        let label = pattern.captures(&head).and_then(|c| c.get(1));
        if let Some(label) = label {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become the Unicode replacement character rather than an
/// error, so garbage bytes still produce a best-effort document.
///
/// # Example
///
/// ```
/// use rs_textractor::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
