//! Chapterize: chapter segmentation engine for e-book content.
//!
//! Takes the already-parsed pieces of an e-book package — document
//! records, navigation tree, and spine — and produces an ordered
//! sequence of narrative chapters, each a title plus ordered paragraph
//! strings, suitable for narration or storage. Book markup varies
//! wildly across publishers, so three independent extraction strategies
//! (navigation-driven, file-heuristic, reading-order) are tried in
//! priority order and their output validated before one is committed.
//!
//! The engine is purely computational: synchronous, no I/O, no shared
//! state across invocations. Inputs are read-only views owned by the
//! caller; outputs are newly allocated.
//!
//! ```
//! use chapterize::{segment, Book, DocumentRecord, NavEntry};
//!
//! let book = Book::new("A Memory of Rain", "I. Author");
//! let body = "The rain had not stopped for three days, and the river \
//!             was rising past the old stone markers. "
//!     .repeat(10);
//! let documents = vec![DocumentRecord::new(
//!     "ch01.xhtml",
//!     format!("<h1>Chapter 1</h1><p>{body}</p>"),
//! )];
//! let nav = vec![NavEntry::new("Chapter 1", "ch01.xhtml")];
//!
//! let result = segment(book, &documents, &nav, &[]).unwrap();
//! assert_eq!(result.chapters.len(), 1);
//! assert_eq!(result.chapters[0].number, 1);
//! ```

pub mod classify;
pub mod config;
pub mod content;
pub mod error;
mod patterns;
pub mod selector;
pub mod strategy;
pub mod title;
pub mod tuning;
pub mod types;

pub use config::{SegmentConfig, SelectionPolicy};
pub use error::{Result, SegmentError};
pub use selector::{Segmentation, SegmentWarning, Validation};
pub use strategy::{SegmentInput, Strategy, StrategyKind};
pub use types::{
    flatten_nav, Book, Chapter, DocumentRecord, ExtractionResult, NavEntry, SpineEntry,
};

/// The segmentation engine, carrying run configuration.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmentConfig,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit configuration
    pub fn with_config(config: SegmentConfig) -> Self {
        Self { config }
    }

    /// Set the strategy selection policy
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Segment one book into chapters.
    ///
    /// Strategies run in priority order (navigation, file-heuristic,
    /// reading-order); the committed result's chapters are renumbered
    /// densely from 1. Zero chapters is a valid result, flagged with
    /// [`SegmentWarning::NoContentFound`] rather than an error.
    pub fn segment(
        &self,
        book: Book,
        documents: &[DocumentRecord],
        nav_tree: &[NavEntry],
        spine: &[SpineEntry],
    ) -> Result<Segmentation> {
        let selected = {
            let input = SegmentInput::new(&book, documents, nav_tree, spine)?;
            selector::run(&input, &self.config)
        };
        Ok(Segmentation {
            book,
            chapters: selected.chapters,
            strategy: selected.strategy,
            confidence: selected.confidence,
            warnings: selected.warnings,
        })
    }
}

/// Segment a book with the default configuration.
pub fn segment(
    book: Book,
    documents: &[DocumentRecord],
    nav_tree: &[NavEntry],
    spine: &[SpineEntry],
) -> Result<Segmentation> {
    Segmenter::new().segment(book, documents, nav_tree, spine)
}
