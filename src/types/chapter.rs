//! Chapter type, the engine's output unit

use serde::{Deserialize, Serialize};

/// A single extracted chapter. Immutable once emitted.
///
/// `number` is assigned densely and sequentially by the engine
/// (1, 2, 3, ...) in final output order; it is not the publisher's
/// chapter numbering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    /// Sequential chapter number, starting at 1
    pub number: u32,

    /// Chapter title
    pub title: String,

    /// Ordered, whitespace-collapsed, non-empty paragraph strings
    pub paragraphs: Vec<String>,
}

impl Chapter {
    /// Create a new chapter
    pub fn new(number: u32, title: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            number,
            title: title.into(),
            paragraphs,
        }
    }

    /// Total character count across all paragraphs
    pub fn content_chars(&self) -> usize {
        self.paragraphs.iter().map(|p| p.chars().count()).sum()
    }
}
