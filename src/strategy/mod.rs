//! Extraction strategies: three independent pipelines that each turn
//! the whole book into a chapter list.
//!
//! Each strategy is a pure function of the same immutable input, so
//! they can run in any order, or in parallel, without coordination.
//! The selector decides which result survives.

mod file;
mod nav;
mod spine;

pub use file::FileHeuristicStrategy;
pub use nav::NavigationStrategy;
pub use spine::ReadingOrderStrategy;

use crate::config::SegmentConfig;
use crate::error::{Result, SegmentError};
use crate::tuning;
use crate::types::{Book, DocumentRecord, ExtractionResult, NavEntry, SpineEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extraction pipeline produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Driven by the navigation tree (titles authoritative)
    Navigation,
    /// Path-sorted documents gated by the chapter classifier
    FileHeuristic,
    /// The spine's linear reading order, most permissive
    ReadingOrder,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Navigation => write!(f, "navigation"),
            StrategyKind::FileHeuristic => write!(f, "file-heuristic"),
            StrategyKind::ReadingOrder => write!(f, "reading-order"),
        }
    }
}

/// Trait for whole-book extraction strategies.
pub trait Strategy: Send + Sync {
    /// Which pipeline this is
    fn kind(&self) -> StrategyKind;

    /// Attempt extraction over the whole book. Never fails; a strategy
    /// that finds nothing returns an empty result.
    fn extract(&self, input: &SegmentInput<'_>, config: &SegmentConfig) -> ExtractionResult;
}

/// The strategies in selection priority order. Reading order is the
/// most permissive (it can admit boilerplate), so it comes last.
pub fn strategies_in_priority() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(NavigationStrategy),
        Box::new(FileHeuristicStrategy),
        Box::new(ReadingOrderStrategy),
    ]
}

/// A document record with its markup decoded to text, ready for parsing.
#[derive(Debug)]
pub(crate) struct DecodedDocument<'a> {
    pub path: &'a str,
    pub raw_len: usize,
    pub markup: String,
}

/// The immutable inputs to a segmentation run, shared by every
/// strategy. Document markup is decoded once up front; HTML parsing
/// happens per strategy because the parsed tree is not shareable
/// across threads.
#[derive(Debug)]
pub struct SegmentInput<'a> {
    pub book: &'a Book,
    pub documents: &'a [DocumentRecord],
    pub nav_tree: &'a [NavEntry],
    pub spine: &'a [SpineEntry],
    pub(crate) decoded: Vec<DecodedDocument<'a>>,
}

impl<'a> SegmentInput<'a> {
    /// Decode every document's markup, rejecting byte content that is
    /// not meaningfully text.
    pub fn new(
        book: &'a Book,
        documents: &'a [DocumentRecord],
        nav_tree: &'a [NavEntry],
        spine: &'a [SpineEntry],
    ) -> Result<Self> {
        let mut decoded = Vec::with_capacity(documents.len());
        for record in documents {
            decoded.push(DecodedDocument {
                path: &record.path,
                raw_len: record.raw_markup.len(),
                markup: decode_markup(record)?,
            });
        }
        Ok(Self {
            book,
            documents,
            nav_tree,
            spine,
            decoded,
        })
    }

    /// Look up a document by href/path: exact match first, then a
    /// suffix match in either direction on a path-segment boundary
    /// (nav hrefs are often archive-root-relative while records carry
    /// an `OEBPS/`-style prefix).
    pub(crate) fn find_document(&self, href: &str) -> Option<&DecodedDocument<'a>> {
        let href = href.trim_start_matches("./");
        if let Some(doc) = self.decoded.iter().find(|d| d.path == href) {
            return Some(doc);
        }
        self.decoded
            .iter()
            .find(|d| suffix_matches(d.path, href) || suffix_matches(href, d.path))
    }
}

/// Whether `suffix` names the same file as `path`, allowing extra
/// leading path segments on `path`.
fn suffix_matches(path: &str, suffix: &str) -> bool {
    path.len() > suffix.len()
        && path.ends_with(suffix)
        && path[..path.len() - suffix.len()].ends_with('/')
}

fn decode_markup(record: &DocumentRecord) -> Result<String> {
    match std::str::from_utf8(&record.raw_markup) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => {
            let lossy = String::from_utf8_lossy(&record.raw_markup).into_owned();
            let total = lossy.chars().count().max(1);
            let replaced = lossy.chars().filter(|&c| c == '\u{FFFD}').count();
            if replaced as f32 / total as f32 > tuning::MALFORMED_REPLACEMENT_RATIO {
                return Err(SegmentError::MalformedInput(format!(
                    "document '{}' is not text ({} of {} chars undecodable)",
                    record.path, replaced, total
                )));
            }
            tracing::warn!(
                "document '{}' contains invalid UTF-8; decoded lossily",
                record.path
            );
            Ok(lossy)
        }
    }
}
