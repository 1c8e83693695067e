//! Cached regex patterns for chapter and title detection.
//!
//! Uses LazyLock to compile each pattern once on first use. Classifier
//! patterns run against lowercased text and are written lowercase;
//! title patterns run against original-case lines and carry `(?i)`.

use regex::Regex;
use std::sync::LazyLock;

// === Classifier patterns ===

/// Matches "chapter 7" / "chapter7" chapter-number markers
pub static CHAPTER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"chapter\s*\d+").unwrap());

/// Extended chapter markers: roman numerals, "ch. 3", "part 2", interludes
pub static EXTENDED_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"chapter\s*[ivxlc]+\b",
        r"ch\.\s*\d+",
        r"part\s*\d+",
        r"interlude",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Pronoun + verb-of-action narrative cue
pub static NARRATIVE_PRONOUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(he|she|they)\s+(said|walked|ran|looked|saw)\b").unwrap());

/// Scene-opening phrases
pub static SCENE_OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(once upon|in the|it was|there was)\b").unwrap());

/// Cross-reference / series-preview phrasings
pub static PREVIEW_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"preview of .+ book",
        r"book \w+ of .+ series",
        r"coming in book \w+",
        r"next book.*:",
        r"continues in.*book",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// === Title patterns ===

/// "Chapter 7 -" / "Chapter 7:" heading prefix, for separator normalization
pub static HEADING_NUMBER_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^chapter\s*(\d+)\s*[-:]\s*").unwrap());

/// Bare "Chapter 7" heading
pub static HEADING_BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^chapter\s*(\d+)\s*$").unwrap());

/// Single-line chapter headers, anchored at line start
pub static TITLE_LINE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^chapter\s+\d+.*$",
        r"(?i)^chapter\s+[ivxlc]+.*$",
        r"(?i)^ch\.\s*\d+.*$",
        r"(?i)^prologue.*$",
        r"(?i)^epilogue.*$",
        r"(?i)^interlude.*$",
        r"(?i)^part\s+\d+.*$",
        r"(?i)^part\s+[ivxlc]+.*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Chapter-header patterns appearing anywhere within a line
pub static TITLE_ANYWHERE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)chapter\s+\d+[^a-z]*[a-z][^.]*",
        r"(?i)prologue[^a-z]*[a-z][^.]*",
        r"(?i)epilogue[^a-z]*[a-z][^.]*",
        r"(?i)part\s+\d+[^a-z]*[a-z][^.]*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Standalone arabic chapter number
pub static DIGITS_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Standalone roman chapter number
pub static ROMAN_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[ivxlc]+$").unwrap());

/// "PART" / "BOOK" alone on a line (multi-line header keyword)
pub static PART_OR_BOOK_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(PART|BOOK)\s*$").unwrap());

/// Paragraph starting with a chapter keyword, used as the final title fallback
pub static TITLE_LEADING_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(chapter|prologue|epilogue|part|interlude)\s+").unwrap());
