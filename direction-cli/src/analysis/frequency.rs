//! Word-initial / word-final character frequency extraction

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Occurrence counts of lowercase characters at one word position.
///
/// Iteration follows first occurrence in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyDistribution {
    counts: IndexMap<char, u64>,
}

impl FrequencyDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one occurrence of `ch`
    pub fn record(&mut self, ch: char) {
        *self.counts.entry(ch).or_insert(0) += 1;
    }

    pub fn get(&self, ch: char) -> u64 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Counts in first-occurrence order
    pub fn counts(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct characters observed
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }
}

impl FromIterator<char> for FrequencyDistribution {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut dist = Self::new();
        for ch in iter {
            dist.record(ch);
        }
        dist
    }
}

/// Lowercase a single character.
///
/// A character whose lowercase form spans several scalars (`İ` becomes
/// `i` + U+0307) keeps itself as the key, so it stays distinct from the
/// plain first scalar of that form.
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Token separator: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Build the (initial, final) character distributions of `text`.
///
/// Tokens are separator-delimited; tokens of one character carry no
/// positional signal and are skipped. Both distributions are empty when no
/// token qualifies.
pub fn extract(text: &str) -> (FrequencyDistribution, FrequencyDistribution) {
    let mut initial = FrequencyDistribution::new();
    let mut last = FrequencyDistribution::new();

    for token in tokens(text) {
        let mut chars = token.chars();
        let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
            continue;
        };
        let end = chars.next_back().unwrap_or(second);

        initial.record(fold_case(first));
        last.record(fold_case(end));
    }

    (initial, last)
}

/// Number of separator-delimited tokens, single characters included
pub fn count_tokens(text: &str) -> usize {
    tokens(text).count()
}
