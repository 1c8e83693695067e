//! Title extraction: recovers a human-readable chapter title from a
//! markup fragment.
//!
//! Publishers format chapter headers in wildly different ways, so this
//! runs a chain of fallback strategies in order and returns the first
//! non-empty result: heading elements, multi-line keyword headers
//! (`CHAPTER` / `21` / `Listen to the Wind` as separate blocks),
//! single-line headers, keyword patterns anywhere in a line, standalone
//! chapter numbers, and finally keyword-leading paragraphs. An empty
//! return means "no title found"; the caller synthesizes "Chapter N".

use crate::content::{self, normalize_whitespace};
use crate::{patterns, tuning};
use scraper::{Html, Selector};

/// Heading texts that are too generic to be a title on their own.
const HEADING_STOPWORDS: &[&str] = &["chapter", "the", "a", "an"];

/// Keyword lines that open a multi-line chapter header.
const HEADER_KEYWORDS: &[&str] = &["CHAPTER", "PROLOGUE", "EPILOGUE", "INTERLUDE"];

/// Extract a best-effort title from the fragment.
///
/// `book_title` is the book's own title; lines repeating it are skipped
/// when assembling multi-line headers (publishers often restate the
/// book title above each chapter header).
pub fn extract_title(html: &Html, book_title: Option<&str>) -> String {
    if let Some(title) = heading_title(html) {
        return title;
    }

    let lines = content::text_lines(html);
    let title = multiline_title(&lines, book_title);
    if !title.is_empty() {
        return truncate_chars(&title, tuning::MAX_TITLE_CHARS);
    }
    let title = single_line_title(&lines);
    if !title.is_empty() {
        return truncate_chars(&title, tuning::MAX_TITLE_CHARS);
    }
    let title = pattern_anywhere_title(&lines);
    if !title.is_empty() {
        return truncate_chars(&title, tuning::MAX_TITLE_CHARS);
    }
    let title = numeric_title(&lines);
    if !title.is_empty() {
        return title;
    }

    keyword_paragraph_title(html).unwrap_or_default()
}

/// First usable heading element, levels 1 through 4.
fn heading_title(html: &Html) -> Option<String> {
    for tag in ["h1", "h2", "h3", "h4"] {
        let selector = Selector::parse(tag).unwrap();
        if let Some(heading) = html.select(&selector).next() {
            let text = normalize_whitespace(&heading.text().collect::<String>());
            if text.chars().count() > 2 && !HEADING_STOPWORDS.contains(&text.to_lowercase().as_str())
            {
                return Some(truncate_chars(&normalize_heading(&text), tuning::MAX_TITLE_CHARS));
            }
        }
    }
    None
}

/// Collapse "Chapter 7 -" style separators to "Chapter 7:" and strip
/// trailing separators from bare numbered headings.
fn normalize_heading(title: &str) -> String {
    let title = patterns::HEADING_NUMBER_SEPARATOR.replace(title, "Chapter $1: ");
    let title = patterns::HEADING_BARE_NUMBER.replace(&title, "Chapter $1");
    title.into_owned()
}

/// Multi-line header: a keyword line (`CHAPTER`, `PROLOGUE`, bare
/// `PART`/`BOOK`) followed by short number/subtitle lines.
fn multiline_title(lines: &[String], book_title: Option<&str>) -> String {
    let book_lc = book_title
        .map(|t| t.trim().to_lowercase())
        .filter(|t| t.chars().count() >= 4);

    for (i, line) in lines.iter().take(15).enumerate() {
        let upper = line.to_uppercase();
        let keyword = if HEADER_KEYWORDS.contains(&upper.as_str()) {
            Some(upper)
        } else if patterns::PART_OR_BOOK_ONLY.is_match(&upper) {
            Some(upper.trim().to_string())
        } else {
            None
        };
        let Some(keyword) = keyword else { continue };

        let mut parts = vec![keyword];
        for next in lines.iter().skip(i + 1).take(5) {
            // Chapter numbers stack before the subtitle.
            if patterns::DIGITS_ONLY.is_match(next) || patterns::ROMAN_ONLY.is_match(next) {
                parts.push(next.clone());
                continue;
            }
            if next.chars().count() <= 2 {
                continue;
            }
            if let Some(book) = &book_lc {
                if next.to_lowercase().contains(book.as_str()) {
                    continue;
                }
            }
            parts.push(next.clone());
            break;
        }
        return parts.join(" ");
    }

    String::new()
}

/// Single-line header at the start of a line.
fn single_line_title(lines: &[String]) -> String {
    for line in lines.iter().take(10) {
        if patterns::TITLE_LINE_PATTERNS.iter().any(|re| re.is_match(line)) {
            return line.trim().to_string();
        }
    }
    String::new()
}

/// Keyword pattern anywhere within a line; returns the matched span in
/// its original casing.
fn pattern_anywhere_title(lines: &[String]) -> String {
    for line in lines.iter().take(20) {
        for re in patterns::TITLE_ANYWHERE_PATTERNS.iter() {
            if let Some(m) = re.find(line) {
                return m.as_str().trim().to_string();
            }
        }
    }
    String::new()
}

/// Standalone number or roman numeral wrapped as "Chapter N".
fn numeric_title(lines: &[String]) -> String {
    for line in lines.iter().take(10) {
        if patterns::DIGITS_ONLY.is_match(line) {
            return format!("Chapter {}", line);
        }
        if patterns::ROMAN_ONLY.is_match(line) {
            return format!("Chapter {}", line.to_uppercase());
        }
    }
    String::new()
}

/// Final fallback: first paragraph beginning with a chapter keyword.
fn keyword_paragraph_title(html: &Html) -> Option<String> {
    let selector = Selector::parse("p").unwrap();
    for p in html.select(&selector) {
        let text = normalize_whitespace(&p.text().collect::<String>());
        if patterns::TITLE_LEADING_KEYWORD.is_match(&text) {
            return Some(truncate_chars(&text, tuning::MAX_TITLE_CHARS));
        }
    }
    None
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].trim_end().to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_of(html: &str) -> String {
        extract_title(&Html::parse_document(html), None)
    }

    #[test]
    fn test_heading_separator_normalized() {
        let title = title_of("<h1>Chapter 7 - The Storm</h1><p>Rain fell.</p>");
        assert_eq!(title, "Chapter 7: The Storm");
    }

    #[test]
    fn test_heading_taken_verbatim_when_already_clean() {
        let title = title_of("<h2>The Long Road Home</h2><p>They set out at dawn.</p>");
        assert_eq!(title, "The Long Road Home");
    }

    #[test]
    fn test_generic_heading_skipped() {
        // A bare "Chapter" heading carries no information; the line-based
        // fallbacks assemble the real header instead.
        let title = title_of("<h1>Chapter</h1><p>21</p><p>Listen to the Wind</p>");
        assert_eq!(title, "CHAPTER 21 Listen to the Wind");
    }

    #[test]
    fn test_multiline_header_assembled() {
        let title = title_of("<p>PROLOGUE</p><p>Dragonmount</p><p>The wind rose high.</p>");
        assert_eq!(title, "PROLOGUE Dragonmount");
    }

    #[test]
    fn test_multiline_header_skips_book_title_lines() {
        let html = Html::parse_document(
            "<p>CHAPTER</p><p>The Wheel of Time</p><p>14</p><p>The Stag</p>",
        );
        let title = extract_title(&html, Some("The Wheel of Time"));
        assert_eq!(title, "CHAPTER 14 The Stag");
    }

    #[test]
    fn test_single_line_header() {
        let title = title_of("<div>CHAPTER XIV The Long Road</div><p>Dust everywhere.</p>");
        assert_eq!(title, "CHAPTER XIV The Long Road");
    }

    #[test]
    fn test_numeric_line_wrapped() {
        let title = title_of("<div>217</div><p>No heading anywhere in this one at all</p>");
        assert_eq!(title, "Chapter 217");
    }

    #[test]
    fn test_roman_line_wrapped_uppercase() {
        let title = title_of("<div>xiv</div><p>No heading anywhere in this one at all</p>");
        assert_eq!(title, "Chapter XIV");
    }

    #[test]
    fn test_no_title_yields_empty() {
        let title = title_of("<p>Just ordinary narrative text with nothing header-like.</p>");
        assert_eq!(title, "");
    }

    #[test]
    fn test_long_heading_truncated() {
        let long = "A".repeat(400);
        let title = title_of(&format!("<h1>{}</h1>", long));
        assert_eq!(title.chars().count(), 200);
    }
}
