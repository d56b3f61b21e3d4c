//! Combine positional metrics into a directionality score and verdict

use super::frequency::FrequencyDistribution;
use crate::error::{AnalysisError, Result};
use crate::models::{AnalysisResult, MetricSet, Variant, Verdict};
use indexmap::IndexSet;

/// Everything the scorer derives from one pair of distributions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub initial: MetricSet,
    pub last: MetricSet,
    pub gini_difference: f64,
    pub entropy_difference: f64,
    /// log2 of the distinct characters across both positions
    pub max_entropy: f64,
    pub normalized_gini_difference: f64,
    pub normalized_entropy_difference: f64,
    pub combined_score: f64,
    pub verdict: Verdict,
}

impl ScoreBreakdown {
    /// Attach run metadata to produce the immutable result record
    pub fn into_result(
        self,
        source_id: impl Into<String>,
        variant: Variant,
        sample_size_chars: usize,
        token_count: usize,
    ) -> AnalysisResult {
        AnalysisResult {
            source_id: source_id.into(),
            variant,
            sample_size_chars,
            token_count,
            initial_gini: self.initial.gini,
            final_gini: self.last.gini,
            initial_entropy: self.initial.entropy,
            final_entropy: self.last.entropy,
            gini_difference: self.gini_difference,
            entropy_difference: self.entropy_difference,
            normalized_gini_difference: self.normalized_gini_difference,
            normalized_entropy_difference: self.normalized_entropy_difference,
            combined_score: self.combined_score,
            verdict: self.verdict,
        }
    }
}

fn ensure_usable(dist: &FrequencyDistribution, position: &str) -> Result<()> {
    if dist.is_empty() {
        return Err(AnalysisError::EmptyInput {
            context: format!("no {position} characters"),
        });
    }
    if dist.total() == 0 {
        return Err(AnalysisError::DegenerateDistribution);
    }
    Ok(())
}

/// Number of distinct characters seen at either position
fn distinct_chars(initial: &FrequencyDistribution, last: &FrequencyDistribution) -> usize {
    initial
        .chars()
        .chain(last.chars())
        .collect::<IndexSet<char>>()
        .len()
}

/// Score a pair of (initial, final) distributions.
///
/// The Gini difference is mapped from its nominal `[-1, 1]` range onto
/// `[0, 1]`; the entropy difference is mapped onto `[0, 1]` using the
/// maximum entropy attainable over the combined alphabet. A positive
/// `normalized_entropy - normalized_gini` reads left-to-right.
pub fn score(initial: &FrequencyDistribution, last: &FrequencyDistribution) -> Result<ScoreBreakdown> {
    ensure_usable(initial, "word-initial")?;
    ensure_usable(last, "word-final")?;

    let initial_metrics = MetricSet::from_counts(&initial.counts());
    let last_metrics = MetricSet::from_counts(&last.counts());

    let gini_difference = initial_metrics.gini - last_metrics.gini;
    let entropy_difference = initial_metrics.entropy - last_metrics.entropy;

    let unique = distinct_chars(initial, last);
    let max_entropy = if unique > 0 {
        (unique as f64).log2()
    } else {
        0.0
    };

    let normalized_gini_difference = (gini_difference + 1.0) / 2.0;
    let normalized_entropy_difference = if max_entropy > 0.0 {
        (entropy_difference + max_entropy) / (2.0 * max_entropy)
    } else {
        0.0
    };

    let combined_score = normalized_entropy_difference - normalized_gini_difference;

    Ok(ScoreBreakdown {
        initial: initial_metrics,
        last: last_metrics,
        gini_difference,
        entropy_difference,
        max_entropy,
        normalized_gini_difference,
        normalized_entropy_difference,
        combined_score,
        verdict: Verdict::from_score(combined_score),
    })
}
