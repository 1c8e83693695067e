//! Navigation-driven extraction: one chapter per navigation entry.
//!
//! Navigation titles are treated as authoritative when present; content
//! is extracted from the entry's target document, starting at the
//! anchor's parent node when the entry carries an anchor.

use super::{SegmentInput, Strategy, StrategyKind};
use crate::config::SegmentConfig;
use crate::content::ContentExtractor;
use crate::content::normalize_whitespace;
use crate::types::{flatten_nav, Chapter, ExtractionResult};
use ego_tree::NodeRef;
use scraper::{Html, Node};

pub struct NavigationStrategy;

impl Strategy for NavigationStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Navigation
    }

    fn extract(&self, input: &SegmentInput<'_>, config: &SegmentConfig) -> ExtractionResult {
        let extractor =
            ContentExtractor::new().with_min_paragraph_chars(config.min_paragraph_chars);
        let mut chapters = Vec::new();

        for entry in flatten_nav(input.nav_tree) {
            let Some(doc) = input.find_document(&entry.href) else {
                tracing::debug!(
                    "nav entry '{}' points at unknown document '{}'",
                    entry.title,
                    entry.href
                );
                continue;
            };

            let html = Html::parse_document(&doc.markup);
            let paragraphs = match entry.anchor.as_deref().and_then(|a| find_anchor(&html, a)) {
                // The anchor element itself is usually just the heading;
                // its parent holds the chapter body.
                Some(node) => extractor.extract_from(node.parent().unwrap_or(node)),
                None => extractor.extract_document(&html),
            };

            let content_chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
            if content_chars <= config.nav_min_content_chars {
                continue;
            }

            let number = chapters.len() as u32 + 1;
            let title = normalize_whitespace(&entry.title);
            let title = if title.is_empty() {
                format!("Chapter {}", number)
            } else {
                title
            };
            chapters.push(Chapter::new(number, title, paragraphs));
        }

        ExtractionResult::new(chapters)
    }
}

/// Find the element carrying `id` (or legacy `name`) equal to the anchor.
fn find_anchor<'a>(html: &'a Html, anchor: &str) -> Option<NodeRef<'a, Node>> {
    html.root_element().descendants().find(|node| {
        node.value().as_element().is_some_and(|el| {
            el.attr("id") == Some(anchor) || el.attr("name") == Some(anchor)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Book, DocumentRecord, NavEntry};

    #[test]
    fn test_anchor_scopes_extraction_to_parent() {
        let markup = "<body>\
            <div><h2 id='one'>First</h2><p>First section body text goes on for a while here.</p></div>\
            <div><h2 id='two'>Second</h2><p>Second section body text goes on for a while here.</p></div>\
            </body>";
        let docs = vec![DocumentRecord::new("c.xhtml", markup)];
        let nav = vec![
            NavEntry::new("One", "c.xhtml#one"),
            NavEntry::new("Two", "c.xhtml#two"),
        ];
        let book = Book::new("T", "A");
        let spine = Vec::new();
        let input = SegmentInput::new(&book, &docs, &nav, &spine).unwrap();

        let result = NavigationStrategy.extract(&input, &SegmentConfig::default());
        assert_eq!(result.len(), 2);
        assert_eq!(result.chapters[0].title, "One");
        let joined = result.chapters[0].paragraphs.join(" ");
        assert!(joined.contains("First section body"));
        assert!(!joined.contains("Second section body"));
    }

    #[test]
    fn test_unknown_href_is_skipped_not_fatal() {
        let docs = vec![DocumentRecord::new(
            "real.xhtml",
            "<p>Enough text to pass the navigation content floor comfortably, twice over.</p>",
        )];
        let nav = vec![
            NavEntry::new("Ghost", "missing.xhtml"),
            NavEntry::new("Real", "real.xhtml"),
        ];
        let book = Book::new("T", "A");
        let spine = Vec::new();
        let input = SegmentInput::new(&book, &docs, &nav, &spine).unwrap();

        let result = NavigationStrategy.extract(&input, &SegmentConfig::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result.chapters[0].title, "Real");
    }

    #[test]
    fn test_thin_content_not_emitted() {
        let docs = vec![DocumentRecord::new("c.xhtml", "<p>Too thin.</p>")];
        let nav = vec![NavEntry::new("Thin", "c.xhtml")];
        let book = Book::new("T", "A");
        let spine = Vec::new();
        let input = SegmentInput::new(&book, &docs, &nav, &spine).unwrap();

        let result = NavigationStrategy.extract(&input, &SegmentConfig::default());
        assert!(result.is_empty());
    }
}
