//! Corpus analysis pipeline
//!
//! Orchestrates a run over many sources:
//! 1. Load each source's text
//! 2. Cut it to the sample-size cap (plain character count)
//! 3. Build the fully character-reversed copy
//! 4. Score both copies
//! 5. Collect results in input order, recording sources that failed
//!
//! Sources are independent, so with more than one worker they are scored
//! on a rayon pool and merged back in input order.

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

use crate::analysis::{self, count_tokens};
use crate::corpus::CorpusSource;
use crate::error::Result;
use crate::models::{AnalysisResult, RunReport, RunStats, SourceFailure, Variant};

/// Keep the first `cap` characters of `text`.
///
/// Not word-boundary aware: a token straddling the cut is kept partially.
pub fn sample(text: &str, cap: Option<NonZeroUsize>) -> &str {
    match cap {
        Some(cap) => match text.char_indices().nth(cap.get()) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        },
        None => text,
    }
}

/// Reverse the full character sequence (not the word order)
pub fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}

/// Analyse an already-loaded text: the Normal result, then the Reversed one.
pub fn analyze_text(
    source_id: &str,
    text: &str,
    cap: Option<NonZeroUsize>,
) -> Result<[AnalysisResult; 2]> {
    let sampled = sample(text, cap);
    let sample_size_chars = sampled.chars().count();
    let token_count = count_tokens(sampled);
    let reversed = reverse_chars(sampled);

    let normal = analysis::analyze(sampled)?;
    let backwards = analysis::analyze(&reversed)?;

    Ok([
        normal.into_result(source_id, Variant::Normal, sample_size_chars, token_count),
        backwards.into_result(source_id, Variant::Reversed, sample_size_chars, token_count),
    ])
}

/// Load and analyse one source
pub fn analyze_source(source: &CorpusSource) -> Result<[AnalysisResult; 2]> {
    debug!("Processing {} ({})", source.id, source.describe());
    let text = source.load()?;
    analyze_text(&source.id, &text, source.sample_size)
}

/// Runs the directionality analysis over a list of sources.
#[derive(Clone)]
pub struct Pipeline {
    /// Number of rayon workers (1 = sequential)
    workers: usize,
    progress: Option<ProgressBar>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            workers: 1,
            progress: None,
        }
    }

    /// Analyse sources in parallel on `workers` threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Tick a progress bar once per finished source.
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    fn process(&self, source: &CorpusSource) -> Result<[AnalysisResult; 2]> {
        let outcome = analyze_source(source);
        if let Some(bar) = &self.progress {
            bar.set_message(source.id.clone());
            bar.inc(1);
        }
        outcome
    }

    fn process_all(&self, sources: &[CorpusSource]) -> Vec<Result<[AnalysisResult; 2]>> {
        if self.workers > 1 && sources.len() > 1 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .build()
            {
                Ok(pool) => {
                    return pool.install(|| sources.par_iter().map(|s| self.process(s)).collect());
                }
                Err(e) => warn!(
                    "Could not start {} workers, running sequentially: {}",
                    self.workers, e
                ),
            }
        }
        sources.iter().map(|s| self.process(s)).collect()
    }

    /// Run every source; never aborts on a single source's failure.
    pub fn run(&self, sources: &[CorpusSource]) -> RunReport {
        let outcomes = self.process_all(sources);

        let mut results = Vec::with_capacity(sources.len() * 2);
        let mut failures = Vec::new();

        for (source, outcome) in sources.iter().zip(outcomes) {
            match outcome {
                Ok(pair) => {
                    debug!(
                        "Analysis for {} completed: {} / {}",
                        source.id, pair[0].verdict, pair[1].verdict
                    );
                    results.extend(pair);
                }
                Err(e) => {
                    warn!("Error processing {}: {}", source.id, e);
                    failures.push(SourceFailure::from_error(&source.id, &e));
                }
            }
        }

        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }

        let stats = RunStats::from_results(sources.len(), &results, failures.len());
        info!("Run complete: {}", stats.summary());

        RunReport {
            results,
            failures,
            stats,
        }
    }
}
