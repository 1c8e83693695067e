//! A single markup document from the book container

use serde::{Deserialize, Serialize};

/// One unit of markup content from the container. Owned by the caller,
/// read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Path of the document within the container
    pub path: String,

    /// Raw markup bytes, exactly as stored in the container
    pub raw_markup: Vec<u8>,
}

impl DocumentRecord {
    /// Create a new document record
    pub fn new(path: impl Into<String>, raw_markup: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            raw_markup: raw_markup.into(),
        }
    }
}
