//! Symbol augmentation.
//!
//! Kept separate from the numeric augmenter so the two windows can be
//! tuned independently.

use std::collections::HashSet;

use crate::core::rules::RuleTable;

/// For each of the first `symbol_seed_limit` seeds of length three or
/// more, emit `word+symbol` for every symbol; the prefixed `symbol+word`
/// form is only emitted for seeds of length four or more.
pub fn augment_symbols(seeds: &[String], rules: &RuleTable, candidates: &mut HashSet<String>) {
    for word in seeds.iter().take(rules.symbol_seed_limit) {
        let len = word.chars().count();
        if len < 3 {
            continue;
        }
        for symbol in &rules.symbols {
            candidates.insert(format!("{word}{symbol}"));
            if len >= 4 {
                candidates.insert(format!("{symbol}{word}"));
            }
        }
    }
}
