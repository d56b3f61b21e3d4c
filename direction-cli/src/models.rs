//! Core data models for direction
//!
//! These records are the engine's whole output contract: reporters and
//! library callers consume them, nothing downstream reaches back into the
//! analysis internals.

use crate::error::{AnalysisError, ErrorKind};
use serde::{Deserialize, Serialize};

/// Which copy of a source text an analysis ran on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// The text as supplied (after sampling)
    Normal,
    /// The sampled text with its full character sequence reversed
    Reversed,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Normal => write!(f, "Normal"),
            Variant::Reversed => write!(f, "Reversed"),
        }
    }
}

/// Likely reading direction derived from the sign of the combined score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    LeftToRight,
    RightToLeft,
    Indeterminate,
}

impl Verdict {
    /// `> 0` is left-to-right, `< 0` right-to-left, exactly zero indeterminate.
    pub fn from_score(combined_score: f64) -> Self {
        if combined_score > 0.0 {
            Verdict::LeftToRight
        } else if combined_score < 0.0 {
            Verdict::RightToLeft
        } else {
            Verdict::Indeterminate
        }
    }

    /// True for the LTR/RTL pair in either order
    pub fn opposes(self, other: Verdict) -> bool {
        matches!(
            (self, other),
            (Verdict::LeftToRight, Verdict::RightToLeft)
                | (Verdict::RightToLeft, Verdict::LeftToRight)
        )
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::LeftToRight => write!(f, "Left-to-Right"),
            Verdict::RightToLeft => write!(f, "Right-to-Left"),
            Verdict::Indeterminate => write!(f, "Indeterminate"),
        }
    }
}

/// Concentration and spread of one positional character distribution
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    pub gini: f64,
    /// Shannon entropy in bits
    pub entropy: f64,
}

/// Result of analysing one (source, variant) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub source_id: String,
    pub variant: Variant,
    /// Characters actually analysed (after the sample-size cap)
    pub sample_size_chars: usize,
    /// Whitespace-delimited tokens in the analysed text
    pub token_count: usize,
    pub initial_gini: f64,
    pub final_gini: f64,
    pub initial_entropy: f64,
    pub final_entropy: f64,
    pub gini_difference: f64,
    pub entropy_difference: f64,
    pub normalized_gini_difference: f64,
    pub normalized_entropy_difference: f64,
    pub combined_score: f64,
    pub verdict: Verdict,
}

impl AnalysisResult {
    pub fn initial_metrics(&self) -> MetricSet {
        MetricSet {
            gini: self.initial_gini,
            entropy: self.initial_entropy,
        }
    }

    pub fn final_metrics(&self) -> MetricSet {
        MetricSet {
            gini: self.final_gini,
            entropy: self.final_entropy,
        }
    }
}

/// A source that produced no results, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub source_id: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl SourceFailure {
    pub fn from_error(source_id: impl Into<String>, err: &AnalysisError) -> Self {
        Self {
            source_id: source_id.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Counters for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Sources handed to the runner
    pub sources: usize,
    /// Sources that produced both a Normal and a Reversed result
    pub analysed: usize,
    pub failed: usize,
    /// Analysed sources whose Reversed verdict opposes the Normal verdict
    pub self_check_opposed: usize,
}

impl RunStats {
    pub fn from_results(sources: usize, results: &[AnalysisResult], failed: usize) -> Self {
        let mut stats = Self {
            sources,
            failed,
            ..Default::default()
        };

        // Results always arrive as (Normal, Reversed) pairs per source
        for pair in results.chunks_exact(2) {
            stats.analysed += 1;
            if pair[0].verdict.opposes(pair[1].verdict) {
                stats.self_check_opposed += 1;
            }
        }
        stats
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!(
            "{} sources, {} analysed, {} failed, {}/{} reversed self-checks opposed",
            self.sources, self.analysed, self.failed, self.self_check_opposed, self.analysed
        )
    }
}

/// Everything a run produces, in deterministic order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// (source, Normal), (source, Reversed) in input-source order
    pub results: Vec<AnalysisResult>,
    /// Sources skipped, in input-source order
    pub failures: Vec<SourceFailure>,
    pub stats: RunStats,
}

impl RunReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
