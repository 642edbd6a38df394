//! Rule table construction.
//!
//! The rule table bundles everything that drives augmentation: numeric
//! tokens, symbols, the leet substitution map, the literal year token, and
//! the per-augmenter seed limits. It is built exactly once per run from the
//! configured baselines plus the optional profile facts, and is never
//! mutated afterwards, so a single table can be shared freely across runs
//! and test cases.

use std::collections::BTreeMap;

use crate::core::config::MutationConfig;
use crate::core::profile::{split_list, TargetProfile};

/// Immutable configuration bundle driving the augmenters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    /// Numeric tokens attached by the numeric augmenter. Baseline tokens
    /// first, then birth-year forms, then lucky numbers; duplicates are
    /// harmless because all output lands in a set.
    pub numeric_tokens: Vec<String>,

    /// Symbols attached by the symbol augmenter
    pub symbols: Vec<String>,

    /// Leet substitution map (single lowercase letter to substitute)
    pub leet_map: BTreeMap<char, char>,

    /// Literal year token used by suffix rules
    pub year_token: String,

    /// How many leading seeds receive numeric augmentation
    pub numeric_seed_limit: usize,

    /// How many leading seeds receive symbol augmentation
    pub symbol_seed_limit: usize,

    /// How many leading seeds receive leet-speak transformation
    pub leet_seed_limit: usize,
}

impl RuleTable {
    /// Build a rule table from the configured baselines and profile facts.
    ///
    /// If a birth year is present, the year itself and its last two
    /// characters are appended to the numeric tokens. Lucky numbers are
    /// comma-split and appended as opaque tokens with no numeric-format
    /// validation.
    pub fn build(config: &MutationConfig, profile: &TargetProfile) -> Self {
        let mut numeric_tokens = config.numeric_tokens.clone();

        if let Some(birth_year) = profile.birth_year.as_deref() {
            numeric_tokens.push(birth_year.to_string());
            numeric_tokens.push(last_two_chars(birth_year));
        }
        if let Some(lucky) = profile.lucky_numbers.as_deref() {
            numeric_tokens.extend(split_list(lucky));
        }

        Self {
            numeric_tokens,
            symbols: config.symbols.clone(),
            leet_map: config.leet_map.clone(),
            year_token: config.year_token.clone(),
            numeric_seed_limit: config.numeric_seed_limit,
            symbol_seed_limit: config.symbol_seed_limit,
            leet_seed_limit: config.leet_seed_limit,
        }
    }
}

fn last_two_chars(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(2);
    chars[start..].iter().collect()
}
