//! Book metadata as parsed from the package by the container reader

use serde::{Deserialize, Serialize};

/// Book-level metadata. Parsed once by the container reader and
/// immutable for the engine's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Primary author/creator
    pub author: String,
}

impl Book {
    /// Create a new book with title and author
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}
