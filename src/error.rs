//! Error types for rs-textractor.
//!
//! Extraction itself is total: selectors that match nothing produce empty
//! buckets, not errors, and byte inputs are transcoded lossily rather than
//! rejected. The error surface exists so that input the DOM collaborator
//! could not turn into a usable tree is reported distinctly instead of being
//! masked as "no text found".

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The DOM collaborator failed to produce a usable document tree.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
