//! Calibrated heuristic thresholds.
//!
//! These values were tuned empirically against real publisher EPUBs and
//! have no principled derivation. Treat them as a single tuning surface:
//! adjust here, never inline at call sites.

/// Documents with fewer raw markup bytes than this are never chapters.
pub const MIN_RAW_BYTES: usize = 300;

/// Documents whose extracted plain text is shorter than this are never chapters.
pub const MIN_TEXT_CHARS: usize = 200;

/// A document mentioning "chapter" more densely than this fraction of its
/// word count reads like a table of contents, not narrative that happens
/// to mention chapters.
pub const TOC_DENSITY_THRESHOLD: f64 = 0.02;

/// The density test only applies once "chapter" occurs more than this many
/// times; below that an absolute count carries no signal either way.
pub const TOC_MIN_MENTIONS: usize = 12;

/// A strong chapter marker (chapter number, prologue, epilogue) near the
/// top of the text accepts the document outright, provided the text is
/// longer than this.
pub const STRONG_MARKER_MIN_TEXT_CHARS: usize = 500;

/// Below this text length a document needs converging evidence
/// ([`SHORT_ACCEPT_SCORE`]) to be accepted as a chapter.
pub const SHORT_TEXT_CHARS: usize = 600;

/// Above this text length the heuristic score gets a length bonus.
pub const LONG_TEXT_CHARS: usize = 1500;

/// Minimum heuristic score to accept a normal-length document.
pub const ACCEPT_SCORE: i32 = 2;

/// Minimum heuristic score to accept a short document.
pub const SHORT_ACCEPT_SCORE: i32 = 3;

/// When a document yields no analyzable text at all, accept it as a
/// chapter only if its raw markup exceeds this many bytes.
pub const FALLBACK_MIN_RAW_BYTES: usize = 800;

/// Paragraphs shorter than this are treated as formatting noise (page
/// numbers, running heads) unless they carry sentence-ending punctuation.
pub const MIN_PARAGRAPH_CHARS: usize = 4;

/// Markup nested deeper than this stops being traversed structurally;
/// the remaining subtree is flattened as inline text.
pub const MAX_TREE_DEPTH: usize = 200;

/// Minimum joined paragraph length for a navigation-driven chapter.
pub const NAV_MIN_CONTENT_CHARS: usize = 50;

/// Minimum joined paragraph length for a reading-order chapter.
pub const SPINE_MIN_CONTENT_CHARS: usize = 50;

/// Minimum joined paragraph length for a file-heuristic chapter.
pub const FILE_MIN_CONTENT_CHARS: usize = 100;

/// Extracted titles are truncated to this many characters.
pub const MAX_TITLE_CHARS: usize = 200;

/// An extraction whose chapters jointly hold less text than this is
/// rejected by validation.
pub const MIN_TOTAL_CONTENT_CHARS: usize = 500;

/// Validation treats a result as TOC-shaped only at or above this many chapters.
pub const TOC_SHAPE_MIN_CHAPTERS: usize = 5;

/// Mean chapter length below which a many-chapter result looks TOC-shaped.
pub const TOC_SHAPE_MAX_AVG_CHARS: usize = 150;

/// Accepted results scoring below this confidence carry a warning.
pub const LOW_CONFIDENCE_THRESHOLD: f32 = 0.4;

/// Lossy UTF-8 decoding producing more than this fraction of replacement
/// characters is treated as malformed input.
pub const MALFORMED_REPLACEMENT_RATIO: f32 = 0.25;
