//! Distribution statistics: Gini concentration and Shannon entropy
//!
//! Both functions take raw counts and are total: degenerate inputs
//! (no entries, or entries summing to zero) yield `0.0` instead of
//! dividing by zero.

use crate::models::MetricSet;

/// Gini coefficient of a list of counts.
///
/// Rank-weighted formulation over the ascending-sorted counts:
///
/// ```text
/// gini = 2 * Σ(rank_i * count_i) / (n * total) - (n + 1) / n
/// ```
///
/// 0 for a perfectly uniform distribution, `(n - 1) / n` when all mass sits
/// in one of `n` buckets.
pub fn gini_coefficient(counts: &[u64]) -> f64 {
    let n = counts.len();
    if n == 0 {
        return 0.0;
    }

    let mut sorted = counts.to_vec();
    sorted.sort_unstable();

    let total: u128 = sorted.iter().map(|&c| c as u128).sum();
    if total == 0 {
        return 0.0;
    }

    let weighted: u128 = sorted
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as u128 + 1) * c as u128)
        .sum();

    let n_f = n as f64;
    (2 * weighted) as f64 / (n as u128 * total) as f64 - (n_f + 1.0) / n_f
}

/// Shannon entropy (base 2) of a list of counts.
///
/// Zero counts contribute nothing. Terms are summed over the ascending-sorted
/// counts so any permutation of the same counts yields the same bits.
pub fn shannon_entropy(counts: &[u64]) -> f64 {
    let total: u128 = counts.iter().map(|&c| c as u128).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    let mut sorted = counts.to_vec();
    sorted.sort_unstable();

    let h = -sorted
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            p * p.log2()
        })
        .sum::<f64>();

    // A single symbol sums to -0.0
    if h == 0.0 {
        0.0
    } else {
        h
    }
}

impl MetricSet {
    /// Compute both statistics over the same counts
    pub fn from_counts(counts: &[u64]) -> Self {
        Self {
            gini: gini_coefficient(counts),
            entropy: shannon_entropy(counts),
        }
    }
}
