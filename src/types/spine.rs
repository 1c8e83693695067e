//! Spine (linear reading order) types

use serde::{Deserialize, Serialize};

/// One step of the book's publisher-declared linear reading order.
///
/// The container reader resolves manifest idrefs before handing the
/// spine to the engine, so `document_id` holds a document path (or a
/// suffix of one) that can be matched against [`DocumentRecord::path`].
///
/// [`DocumentRecord::path`]: super::DocumentRecord
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpineEntry {
    /// Identifier/path of the document this entry points at
    pub document_id: String,
}

impl SpineEntry {
    /// Create a new spine entry
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
        }
    }
}
