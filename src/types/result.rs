//! Output of a single extraction strategy

use super::Chapter;
use serde::{Deserialize, Serialize};

/// The chapter list produced by one extraction strategy, before
/// validation. Discarded if validation rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Chapters in the order the strategy emitted them
    pub chapters: Vec<Chapter>,
}

impl ExtractionResult {
    /// Create a result from a chapter list
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// Whether the strategy produced no chapters at all
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Number of chapters produced
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Total character count across every chapter's paragraphs
    pub fn total_content_chars(&self) -> usize {
        self.chapters.iter().map(|c| c.content_chars()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_content_chars_sums_across_chapters() {
        let result = ExtractionResult::new(vec![
            Chapter::new(1, "One", vec!["abcd".to_string(), "ef".to_string()]),
            Chapter::new(2, "Two", vec!["ghi".to_string()]),
        ]);
        assert_eq!(result.total_content_chars(), 9);
        assert_eq!(result.len(), 2);
        assert!(ExtractionResult::default().total_content_chars() == 0);
    }
}
