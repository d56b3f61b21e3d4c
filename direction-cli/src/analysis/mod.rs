//! Positional character statistics for reading-direction inference
//!
//! A text is split into whitespace tokens; the first and last character of
//! every token longer than one character are tallied into two frequency
//! distributions. Each distribution is summarised by its Gini coefficient
//! (concentration) and Shannon entropy (spread), and the two positions are
//! contrasted.
//!
//! # Scoring Formula
//!
//! ```text
//! gini_diff     = initial_gini - final_gini
//! entropy_diff  = initial_entropy - final_entropy
//! max_entropy   = log2(|initial chars ∪ final chars|)
//!
//! norm_gini     = (gini_diff + 1) / 2
//! norm_entropy  = (entropy_diff + max_entropy) / (2 * max_entropy)   (0 if max_entropy == 0)
//!
//! combined      = norm_entropy - norm_gini
//! ```
//!
//! `combined > 0` reads left-to-right, `< 0` right-to-left, `== 0` is
//! indeterminate. The heuristic treats the freer (higher entropy, lower
//! concentration) word edge as the trailing edge of the script.
//!
//! # Example
//!
//! `"The cat sat on the mat"`: initial `{t:2, c:1, s:1, o:1, m:1}`, final
//! `{e:2, t:3, n:1}` → combined ≈ 0.1856, Left-to-Right.

mod frequency;
mod metrics;
mod scorer;

pub use frequency::{count_tokens, extract, FrequencyDistribution};
pub use metrics::{gini_coefficient, shannon_entropy};
pub use scorer::{score, ScoreBreakdown};

use crate::error::{AnalysisError, Result};

/// Extract and score one text in a single step
pub fn analyze(text: &str) -> Result<ScoreBreakdown> {
    let (initial, last) = extract(text);
    if initial.is_empty() || last.is_empty() {
        return Err(AnalysisError::EmptyInput {
            context: "no token longer than one character".into(),
        });
    }
    score(&initial, &last)
}
