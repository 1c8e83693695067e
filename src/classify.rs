//! Chapter classification: decides whether a candidate document is
//! narrative chapter content or front matter / TOC / boilerplate.
//!
//! The rules form an ordered decision list; the first matching rule
//! wins. Strong textual exclusions come first, strong positive identity
//! markers second, weighted heuristics last, so clearly non-chapter
//! content is never admitted even when it is long, while short
//! ambiguous fragments need converging evidence.

use crate::{patterns, tuning};

/// Path name fragments that mark known non-narrative documents
/// (case-insensitive substring match).
const NON_NARRATIVE_PATH_FRAGMENTS: &[&str] = &[
    "cover",
    "toc",
    "contents",
    "copyright",
    "title",
    "thank",
    "acknowledg",
    "dedication",
];

/// Front-matter phrases that reject a document when they appear near
/// the top of its text.
const FRONT_MATTER_PHRASES: &[&str] = &["glossary", "about the author", "acknowledgments"];

/// Classify a candidate document as chapter content.
///
/// `plain_text` is the document's extracted plain text; pass `None`
/// when text extraction was not possible, in which case classification
/// falls back to a raw-length check (a substantial document is probably
/// a chapter even when it cannot be analyzed). This keeps per-document
/// analysis failures from ever aborting whole-book extraction.
pub fn is_chapter_content(path: &str, raw_len: usize, plain_text: Option<&str>) -> bool {
    let path_lc = path.to_lowercase();
    if NON_NARRATIVE_PATH_FRAGMENTS
        .iter()
        .any(|fragment| path_lc.contains(fragment))
    {
        return false;
    }

    match plain_text {
        Some(text) => classify_text(raw_len, text),
        None => raw_len > tuning::FALLBACK_MIN_RAW_BYTES,
    }
}

fn classify_text(raw_len: usize, text: &str) -> bool {
    if raw_len < tuning::MIN_RAW_BYTES {
        return false;
    }
    let text_chars = text.chars().count();
    if text_chars < tuning::MIN_TEXT_CHARS {
        return false;
    }

    let lc = text.to_lowercase();

    // TOC pages repeat "chapter" far more densely per word than
    // narrative text that merely mentions chapters. The ratio matters,
    // not the absolute count: a long chapter can innocuously say
    // "chapter" fifty times.
    let mentions = lc.matches("chapter").count();
    let words = lc.split_whitespace().count();
    if words > 0 && mentions > tuning::TOC_MIN_MENTIONS {
        let density = mentions as f64 / words as f64;
        if density > tuning::TOC_DENSITY_THRESHOLD {
            return false;
        }
    }

    let first_200 = char_prefix(&lc, 200);
    if first_200.contains("contents") && first_200.contains("prologue") {
        return false;
    }
    if FRONT_MATTER_PHRASES.iter().any(|p| first_200.contains(p)) {
        return false;
    }

    let first_500 = char_prefix(&lc, 500);
    if patterns::PREVIEW_PATTERNS.iter().any(|re| re.is_match(first_500)) {
        return false;
    }

    // Strong positive identity markers near the top of the text.
    let first_300 = char_prefix(&lc, 300);
    let has_strong_marker = patterns::CHAPTER_NUMBER.is_match(first_300)
        || first_300.contains("prologue")
        || first_300.contains("epilogue");
    if has_strong_marker && text_chars > tuning::STRONG_MARKER_MIN_TEXT_CHARS {
        return true;
    }

    // Weighted heuristics for the ambiguous remainder.
    let mut score = 0;
    for re in patterns::EXTENDED_MARKERS.iter() {
        if re.is_match(first_300) {
            score += 2;
        }
    }
    if patterns::NARRATIVE_PRONOUN.is_match(first_300)
        || patterns::SCENE_OPENING.is_match(first_300)
    {
        score += 1;
    }
    if text_chars > tuning::LONG_TEXT_CHARS {
        score += 1;
    }

    if text_chars < tuning::SHORT_TEXT_CHARS {
        score >= tuning::SHORT_ACCEPT_SCORE
    } else {
        score >= tuning::ACCEPT_SCORE
    }
}

/// First `n` characters of `s`, cut on a char boundary.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
