//! Content block extraction: turns a markup fragment into an ordered
//! list of paragraph strings.
//!
//! The walk keeps a running text buffer. Inline elements merge into the
//! buffer, `<br>` flushes it, `<p>` contributes its whole flattened text
//! as one paragraph, and container elements flush then recurse. The
//! node tree is scraper's ego-tree arena, so traversal is index-based
//! and read-only throughout.

use crate::tuning;
use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

/// Elements whose subtrees never contribute text (chrome, metadata,
/// script payloads).
const SKIP_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "head", "title"];

/// Elements treated as containers: flush the buffer, then recurse.
const BLOCK_TAGS: &[&str] = &[
    "div", "section", "article", "aside", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6", "ul",
    "ol", "li", "dl", "dt", "dd", "table", "thead", "tbody", "tfoot", "tr", "td", "th", "figure",
    "figcaption", "main", "body", "html",
];

/// Extracts paragraph strings from markup fragments.
///
/// Never fails: an empty or unparseable fragment yields an empty
/// paragraph list, which callers treat as "no content extracted".
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    min_paragraph_chars: usize,
    max_depth: usize,
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self {
            min_paragraph_chars: tuning::MIN_PARAGRAPH_CHARS,
            max_depth: tuning::MAX_TREE_DEPTH,
        }
    }

    /// Set the minimum paragraph length below which unpunctuated
    /// fragments are dropped as formatting noise
    pub fn with_min_paragraph_chars(mut self, chars: usize) -> Self {
        self.min_paragraph_chars = chars;
        self
    }

    /// Extract paragraphs from a whole document, starting at `<body>`
    /// (or the root element when there is no body).
    pub fn extract_document(&self, html: &Html) -> Vec<String> {
        let body = Selector::parse("body").unwrap();
        let root = html
            .select(&body)
            .next()
            .map(|el| *el)
            .unwrap_or_else(|| *html.root_element());
        self.extract_from(root)
    }

    /// Extract paragraphs from the fragment rooted at `node`.
    pub fn extract_from(&self, node: NodeRef<'_, Node>) -> Vec<String> {
        let mut out = Vec::new();
        self.walk(node, &mut out, 0);
        out
    }

    fn walk(&self, node: NodeRef<'_, Node>, out: &mut Vec<String>, depth: usize) {
        let mut buffer = String::new();

        for child in node.children() {
            match child.value() {
                Node::Comment(_) => {}
                Node::Text(text) => {
                    if !text.trim().is_empty() {
                        buffer.push_str(text);
                    }
                }
                Node::Element(element) => {
                    let tag = element.name();
                    if SKIP_TAGS.contains(&tag) {
                        continue;
                    }
                    if tag == "br" {
                        self.flush(&mut buffer, out);
                    } else if tag == "p" {
                        self.flush(&mut buffer, out);
                        self.push_paragraph(&flatten_text(child), out);
                    } else if tag == "img" {
                        if let Some(alt) = element.attr("alt") {
                            let alt = normalize_whitespace(alt);
                            if !alt.is_empty() {
                                self.flush(&mut buffer, out);
                                out.push(format!("[image: {}]", alt));
                            }
                        }
                    } else if BLOCK_TAGS.contains(&tag) {
                        self.flush(&mut buffer, out);
                        if depth >= self.max_depth {
                            // Runaway nesting: stop descending structurally
                            // and take the remaining subtree as inline text.
                            buffer.push_str(&flatten_text(child));
                        } else {
                            self.walk(child, out, depth + 1);
                        }
                    } else {
                        // Inline element: adjacent runs merge into one paragraph.
                        buffer.push_str(&flatten_text(child));
                    }
                }
                _ => {}
            }
        }

        self.flush(&mut buffer, out);
    }

    fn flush(&self, buffer: &mut String, out: &mut Vec<String>) {
        if !buffer.is_empty() {
            let text = std::mem::take(buffer);
            self.push_paragraph(&text, out);
        }
    }

    fn push_paragraph(&self, text: &str, out: &mut Vec<String>) {
        let text = normalize_whitespace(text);
        if text.is_empty() {
            return;
        }
        if text.chars().count() < self.min_paragraph_chars
            && !text.contains(|c| matches!(c, '.' | '!' | '?' | '…'))
        {
            return;
        }
        out.push(text);
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Flattened text of a node's subtree, skipping comments and chrome
/// elements. `<br>` becomes a space so joined lines stay separated.
pub(crate) fn flatten_text(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    flatten_into(node, &mut out);
    out
}

fn flatten_into(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                let tag = element.name();
                if SKIP_TAGS.contains(&tag) {
                    continue;
                }
                if tag == "br" {
                    out.push(' ');
                }
                flatten_into(child, out);
            }
            _ => {}
        }
    }
}

/// Plain-text lines of a document, one line per block-level element.
/// This keeps `<p>CHAPTER</p><p>21</p>` as two lines even in minified
/// markup, which the line-based title heuristics depend on.
pub fn text_lines(html: &Html) -> Vec<String> {
    let mut raw = String::new();
    lines_into(*html.root_element(), &mut raw);
    raw.lines()
        .map(normalize_whitespace)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Whole-document plain text, newline-separated by block boundaries.
pub fn plain_text(html: &Html) -> String {
    text_lines(html).join("\n")
}

fn lines_into(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                let tag = element.name();
                if SKIP_TAGS.contains(&tag) {
                    continue;
                }
                if tag == "br" {
                    out.push('\n');
                } else if tag == "p" || BLOCK_TAGS.contains(&tag) {
                    out.push('\n');
                    lines_into(child, out);
                    out.push('\n');
                } else {
                    lines_into(child, out);
                }
            }
            _ => {}
        }
    }
}

/// Collapse runs of whitespace (including embedded newlines) to single
/// spaces and trim.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        ContentExtractor::new().extract_document(&document)
    }

    #[test]
    fn test_inline_runs_merge_into_one_paragraph() {
        let paragraphs = extract("<p>This is <em>bold</em> text.</p>");
        assert_eq!(paragraphs, vec!["This is bold text."]);
    }

    #[test]
    fn test_line_break_splits_paragraphs() {
        let paragraphs = extract("Line one<br/>Line two");
        assert_eq!(paragraphs, vec!["Line one", "Line two"]);
    }

    #[test]
    fn test_nested_containers_recurse() {
        let paragraphs = extract(
            "<div><blockquote><p>First thought here.</p></blockquote>\
             <section><p>Second thought here.</p></section></div>",
        );
        assert_eq!(paragraphs, vec!["First thought here.", "Second thought here."]);
    }

    #[test]
    fn test_whitespace_collapses() {
        let paragraphs = extract("<p>Spread   across\n\n   many\tlines.</p>");
        assert_eq!(paragraphs, vec!["Spread across many lines."]);
    }

    #[test]
    fn test_short_unpunctuated_fragments_drop() {
        // A bare page number is noise; a short sentence is not.
        let paragraphs = extract("<p>14</p><p>Go.</p><p>A real paragraph follows here.</p>");
        assert_eq!(paragraphs, vec!["Go.", "A real paragraph follows here."]);
    }

    #[test]
    fn test_script_and_nav_are_ignored() {
        let paragraphs = extract(
            "<nav><p>Table of links goes here.</p></nav>\
             <script>var x = 1;</script>\
             <p>Actual story text survives.</p>",
        );
        assert_eq!(paragraphs, vec!["Actual story text survives."]);
    }

    #[test]
    fn test_comments_are_skipped() {
        let paragraphs = extract("<p>Before<!-- hidden --> and after.</p>");
        assert_eq!(paragraphs, vec!["Before and after."]);
    }

    #[test]
    fn test_heading_text_survives_as_paragraph() {
        let paragraphs = extract("<h1>Chapter 3: The Door</h1><p>It opened slowly.</p>");
        assert_eq!(paragraphs, vec!["Chapter 3: The Door", "It opened slowly."]);
    }

    #[test]
    fn test_image_alt_becomes_placeholder() {
        let paragraphs = extract("<p>Before the map.</p><img src='m.png' alt='Map of the realm'/>");
        assert_eq!(paragraphs, vec!["Before the map.", "[image: Map of the realm]"]);
    }

    #[test]
    fn test_deep_nesting_does_not_panic() {
        let mut html = String::from("<body>");
        for _ in 0..300 {
            html.push_str("<div>");
        }
        html.push_str("Buried text that still comes out.");
        for _ in 0..300 {
            html.push_str("</div>");
        }
        html.push_str("</body>");

        let document = Html::parse_document(&html);
        let paragraphs = ContentExtractor::new().extract_document(&document);
        assert_eq!(paragraphs, vec!["Buried text that still comes out."]);
    }

    #[test]
    fn test_empty_fragment_yields_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("<div>   \n\t  </div>").is_empty());
    }

    #[test]
    fn test_text_lines_split_on_block_boundaries() {
        let document = Html::parse_document("<p>CHAPTER</p><p>21</p><p>Listen to the Wind</p>");
        let lines = text_lines(&document);
        assert_eq!(lines, vec!["CHAPTER", "21", "Listen to the Wind"]);
    }
}
