//! Strategy selection and result validation.
//!
//! Strategies run in a fixed priority order; the first result to pass
//! validation wins (or, under [`SelectionPolicy::BestScore`], every
//! strategy runs and the highest-confidence accepted result wins, with
//! ties broken by priority — never by completion order). If nothing
//! passes, the last attempted result is returned as-is: an empty book
//! is a valid, if degenerate, output.

use crate::config::{SegmentConfig, SelectionPolicy};
use crate::strategy::{self, SegmentInput, StrategyKind};
use crate::tuning;
use crate::types::{Chapter, ExtractionResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Outcome of validating one strategy's result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validation {
    /// Whether the result is usable at all
    pub accepted: bool,

    /// Real-valued quality estimate in `[0, 1]`
    pub confidence: f32,
}

/// Warning-level signals surfaced alongside a successful result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SegmentWarning {
    /// Every strategy came up empty; the zero-chapter result stands.
    NoContentFound,

    /// The committed result scored below the confidence floor.
    LowConfidence {
        strategy: StrategyKind,
        confidence: f32,
    },
}

/// The selected, renumbered output of a segmentation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Book metadata, passed through unchanged
    pub book: crate::types::Book,

    /// Final chapters, numbered densely 1..N
    pub chapters: Vec<Chapter>,

    /// Which strategy produced the committed result
    pub strategy: StrategyKind,

    /// Confidence score of the committed result
    pub confidence: f32,

    /// Warning-level signals (low confidence, nothing found)
    pub warnings: Vec<SegmentWarning>,
}

/// Score an extraction result.
///
/// Rejects empty results, results with too little aggregate text, and
/// TOC-shaped results: many very short chapters with near-uniform tiny
/// lengths and generically similar titles. This mirrors the
/// classifier's density test applied at the whole-book level — a bad
/// navigation tree happily yields one "chapter" per TOC link.
pub fn validate(result: &ExtractionResult) -> Validation {
    let n = result.len();
    if n == 0 {
        return Validation {
            accepted: false,
            confidence: 0.0,
        };
    }

    let lengths: Vec<usize> = result.chapters.iter().map(|c| c.content_chars()).collect();
    let total = result.total_content_chars();
    let average = total / n;

    let mut confidence = (average as f32 / tuning::LONG_TEXT_CHARS as f32).min(1.0) * 0.7
        + (n.min(12) as f32 / 12.0) * 0.3;

    if total < tuning::MIN_TOTAL_CONTENT_CHARS {
        return Validation {
            accepted: false,
            confidence: confidence * 0.25,
        };
    }

    if n >= tuning::TOC_SHAPE_MIN_CHAPTERS
        && average < tuning::TOC_SHAPE_MAX_AVG_CHARS
        && (generic_titles(result) || near_uniform(&lengths))
    {
        confidence *= 0.2;
        return Validation {
            accepted: false,
            confidence,
        };
    }

    Validation {
        accepted: true,
        confidence,
    }
}

/// Titles that collapse to at most two distinct strings once digits are
/// stripped ("Link 1", "Link 2", ... or "Page 1", "Page 2", ...).
fn generic_titles(result: &ExtractionResult) -> bool {
    let mut stripped: Vec<String> = result
        .chapters
        .iter()
        .map(|c| {
            c.title
                .chars()
                .filter(|ch| !ch.is_ascii_digit())
                .collect::<String>()
                .trim()
                .to_lowercase()
        })
        .collect();
    stripped.sort();
    stripped.dedup();
    stripped.len() <= 2
}

fn near_uniform(lengths: &[usize]) -> bool {
    let min = lengths.iter().copied().min().unwrap_or(0).max(1);
    let max = lengths.iter().copied().max().unwrap_or(0);
    max <= min * 2
}

pub(crate) struct Selected {
    pub chapters: Vec<Chapter>,
    pub strategy: StrategyKind,
    pub confidence: f32,
    pub warnings: Vec<SegmentWarning>,
}

pub(crate) fn run(input: &SegmentInput<'_>, config: &SegmentConfig) -> Selected {
    let strategies = strategy::strategies_in_priority();

    let attempts: Vec<(StrategyKind, ExtractionResult, Validation)> = match config.policy {
        SelectionPolicy::FirstValid => {
            let mut attempts = Vec::new();
            for s in &strategies {
                let result = s.extract(input, config);
                let validation = validate(&result);
                tracing::debug!(
                    "strategy {} produced {} chapters (confidence {:.2}, accepted: {})",
                    s.kind(),
                    result.len(),
                    validation.confidence,
                    validation.accepted
                );
                let accepted = validation.accepted;
                attempts.push((s.kind(), result, validation));
                if accepted {
                    break;
                }
            }
            attempts
        }
        SelectionPolicy::BestScore => strategies
            .par_iter()
            .map(|s| {
                let result = s.extract(input, config);
                let validation = validate(&result);
                (s.kind(), result, validation)
            })
            .collect(),
    };

    // First accepted attempt with the strictly highest confidence, so
    // confidence ties resolve to priority order; with FirstValid only
    // the last attempt can be accepted, so this reduces to "the one we
    // stopped at". Falls back to the last attempt.
    let mut chosen: Option<(usize, f32)> = None;
    for (i, (_, _, v)) in attempts.iter().enumerate() {
        if v.accepted && chosen.map_or(true, |(_, best)| v.confidence > best) {
            chosen = Some((i, v.confidence));
        }
    }
    let chosen = chosen.map(|(i, _)| i).unwrap_or(attempts.len() - 1);

    let (kind, result, validation) = attempts.into_iter().nth(chosen).expect("attempts non-empty");

    let mut chapters = result.chapters;
    renumber(&mut chapters);

    let mut warnings = Vec::new();
    if chapters.is_empty() {
        tracing::warn!("no strategy extracted any chapters");
        warnings.push(SegmentWarning::NoContentFound);
    } else if !validation.accepted || validation.confidence < config.low_confidence_threshold {
        tracing::warn!(
            "committed {} result with low confidence {:.2}",
            kind,
            validation.confidence
        );
        warnings.push(SegmentWarning::LowConfidence {
            strategy: kind,
            confidence: validation.confidence,
        });
    }

    tracing::info!(
        "selected {} strategy: {} chapters, confidence {:.2}",
        kind,
        chapters.len(),
        validation.confidence
    );

    Selected {
        chapters,
        strategy: kind,
        confidence: validation.confidence,
        warnings,
    }
}

/// Discard provisional ordering keys: chapters are renumbered densely
/// 1..N in the order the committed strategy emitted them.
fn renumber(chapters: &mut [Chapter]) {
    for (i, chapter) in chapters.iter_mut().enumerate() {
        chapter.number = i as u32 + 1;
    }
}
