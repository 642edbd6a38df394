//! Leet-speak transformation.

use std::collections::HashSet;

use crate::core::rules::RuleTable;

/// For each of the first `leet_seed_limit` seeds of length four or more:
/// lowercase the seed, apply every substitution globally, and, only when
/// the result differs from the lowercase original, emit it plus its
/// "123" and year-token suffix forms. An unchanged transform emits
/// nothing, so no-op candidates never duplicate the case expander's work.
pub fn augment_leet(seeds: &[String], rules: &RuleTable, candidates: &mut HashSet<String>) {
    for word in seeds.iter().take(rules.leet_seed_limit) {
        if word.chars().count() < 4 {
            continue;
        }
        let lower = word.to_lowercase();
        let transformed = leet_transform(&lower, rules);
        if transformed == lower {
            continue;
        }
        candidates.insert(format!("{transformed}123"));
        candidates.insert(format!("{transformed}{}", rules.year_token));
        candidates.insert(transformed);
    }
}

/// Apply every leet substitution to `word` as a global character
/// replacement. Substitutions target disjoint source characters, so the
/// application order does not matter.
pub fn leet_transform(word: &str, rules: &RuleTable) -> String {
    word.chars()
        .map(|c| rules.leet_map.get(&c).copied().unwrap_or(c))
        .collect()
}
