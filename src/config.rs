//! Engine configuration

use crate::tuning;
use serde::{Deserialize, Serialize};

/// How the selector combines strategy results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Run strategies in priority order and commit to the first result
    /// that passes validation (the default).
    FirstValid,

    /// Run every strategy (in parallel) and pick the accepted result
    /// with the highest confidence score; ties go to priority order.
    BestScore,
}

/// Tunable knobs for a segmentation run. `Default` mirrors the
/// calibrated constants in [`tuning`].
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentConfig {
    /// Strategy selection policy
    pub policy: SelectionPolicy,

    /// Minimum paragraph length before unpunctuated fragments drop
    pub min_paragraph_chars: usize,

    /// Minimum joined content for a navigation-driven chapter
    pub nav_min_content_chars: usize,

    /// Minimum joined content for a reading-order chapter
    pub spine_min_content_chars: usize,

    /// Minimum joined content for a file-heuristic chapter
    pub file_min_content_chars: usize,

    /// Confidence below which an accepted result carries a warning
    pub low_confidence_threshold: f32,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::FirstValid,
            min_paragraph_chars: tuning::MIN_PARAGRAPH_CHARS,
            nav_min_content_chars: tuning::NAV_MIN_CONTENT_CHARS,
            spine_min_content_chars: tuning::SPINE_MIN_CONTENT_CHARS,
            file_min_content_chars: tuning::FILE_MIN_CONTENT_CHARS,
            low_confidence_threshold: tuning::LOW_CONFIDENCE_THRESHOLD,
        }
    }
}
