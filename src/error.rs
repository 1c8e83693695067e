//! Error types for the segmentation engine

use thiserror::Error;

/// Result type alias using SegmentError
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Hard failures surfaced to the caller.
///
/// The engine deliberately has a narrow error surface: per-fragment
/// problems (an unresolvable anchor, a document a classifier cannot
/// analyze) degrade to documented fallback behavior instead of
/// propagating, so a single bad fragment never aborts whole-book
/// extraction. Producing zero chapters is a valid result, not an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SegmentError {
    /// A document's bytes cannot meaningfully be interpreted as markup
    /// text (e.g. binary data misdeclared as a content document).
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
