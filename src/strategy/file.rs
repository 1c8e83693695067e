//! File-heuristic extraction: the fallback when the navigation tree is
//! useless and before resorting to the raw spine.
//!
//! Documents are taken in path-name order and gated through the chapter
//! classifier, so front matter and boilerplate files are filtered out
//! even without any navigation signal.

use super::{SegmentInput, Strategy, StrategyKind};
use crate::classify;
use crate::config::SegmentConfig;
use crate::content::{self, ContentExtractor};
use crate::title;
use crate::types::{Chapter, ExtractionResult};
use scraper::Html;

pub struct FileHeuristicStrategy;

impl Strategy for FileHeuristicStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::FileHeuristic
    }

    fn extract(&self, input: &SegmentInput<'_>, config: &SegmentConfig) -> ExtractionResult {
        let extractor =
            ContentExtractor::new().with_min_paragraph_chars(config.min_paragraph_chars);

        let mut docs: Vec<_> = input.decoded.iter().collect();
        docs.sort_by(|a, b| a.path.cmp(b.path));

        let mut chapters = Vec::new();
        for doc in docs {
            let html = Html::parse_document(&doc.markup);
            let text = content::plain_text(&html);
            if !classify::is_chapter_content(doc.path, doc.raw_len, Some(&text)) {
                continue;
            }

            let paragraphs = extractor.extract_document(&html);
            let content_chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
            if content_chars <= config.file_min_content_chars {
                continue;
            }

            let number = chapters.len() as u32 + 1;
            let extracted = title::extract_title(&html, Some(&input.book.title));
            let title = if extracted.is_empty() {
                format!("Chapter {}", number)
            } else {
                extracted
            };
            chapters.push(Chapter::new(number, title, paragraphs));
        }

        ExtractionResult::new(chapters)
    }
}
