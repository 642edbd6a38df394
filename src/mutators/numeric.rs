//! Numeric augmentation.
//!
//! Only the leading seeds are augmented: numeric token lists run to tens of
//! entries, and generators front-load their higher-confidence words, so
//! unbounded application to the full seed list would blow the candidate set
//! up on low-signal material.

use std::collections::HashSet;

use crate::core::rules::RuleTable;

/// For each of the first `numeric_seed_limit` seeds of length three or
/// more, emit `word+token` and `token+word` for every numeric token.
pub fn augment_numeric(seeds: &[String], rules: &RuleTable, candidates: &mut HashSet<String>) {
    for word in seeds.iter().take(rules.numeric_seed_limit) {
        if word.chars().count() < 3 {
            continue;
        }
        for token in &rules.numeric_tokens {
            candidates.insert(format!("{word}{token}"));
            candidates.insert(format!("{token}{word}"));
        }
    }
}
