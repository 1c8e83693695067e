//! Reading-order extraction: one chapter per spine document.
//!
//! The spine is the publisher-declared linear reading order and is
//! independent of navigation quality, which makes this strategy
//! order-authoritative but also the most permissive: it admits
//! boilerplate documents freely, so the selector tries it last.

use super::{SegmentInput, Strategy, StrategyKind};
use crate::config::SegmentConfig;
use crate::content::ContentExtractor;
use crate::title;
use crate::types::{Chapter, ExtractionResult};
use scraper::Html;

pub struct ReadingOrderStrategy;

impl Strategy for ReadingOrderStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ReadingOrder
    }

    fn extract(&self, input: &SegmentInput<'_>, config: &SegmentConfig) -> ExtractionResult {
        let extractor =
            ContentExtractor::new().with_min_paragraph_chars(config.min_paragraph_chars);
        let mut chapters = Vec::new();

        for entry in input.spine {
            let Some(doc) = input.find_document(&entry.document_id) else {
                tracing::debug!("spine entry '{}' has no document record", entry.document_id);
                continue;
            };

            let html = Html::parse_document(&doc.markup);
            let paragraphs = extractor.extract_document(&html);
            let content_chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
            if content_chars <= config.spine_min_content_chars {
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
