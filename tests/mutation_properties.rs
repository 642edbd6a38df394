//! End-to-end properties of the mutation and sanitation pipeline.

use proptest::prelude::*;

use skald_rs::core::config::MutationConfig;
use skald_rs::core::pipeline::expand;
use skald_rs::core::profile::TargetProfile;
use skald_rs::core::rules::RuleTable;
use skald_rs::mutators::numeric::augment_numeric;
use skald_rs::mutators::sanitize::{sanitize, ALLOWED_SYMBOLS};
use skald_rs::mutators::symbol::augment_symbols;

fn default_rules(profile: &TargetProfile) -> RuleTable {
    RuleTable::build(&MutationConfig::default(), profile)
}

#[test]
fn name_combo_completeness() {
    let profile = TargetProfile {
        name: Some("ahmet".to_string()),
        surname: Some("yilmaz".to_string()),
        ..TargetProfile::default()
    };
    let candidates = expand(&[], &profile, &default_rules(&profile));

    for expected in [
        "ahmetyilmaz",
        "yilmazahmet",
        "ahmet.yilmaz",
        "ayilmaz",
        "ahmetyilmaz123",
    ] {
        assert!(candidates.contains(expected), "missing {expected}");
    }
}

#[test]
fn phone_truncation() {
    let profile = TargetProfile {
        phone: Some("+90 532 123 45 67".to_string()),
        ..TargetProfile::default()
    };
    let candidates = expand(&[], &profile, &default_rules(&profile));

    assert!(candidates.contains("4567"));
    assert!(candidates.contains("234567"));
}

#[test]
fn leet_emits_transform_but_not_plain_lowercase() {
    let rules = default_rules(&TargetProfile::default());

    let mut leet_out = std::collections::HashSet::new();
    skald_rs::mutators::leet::augment_leet(&["test".to_string()], &rules, &mut leet_out);

    assert!(leet_out.contains("7es7"));
    assert!(leet_out.contains("7es7123"));
    assert!(leet_out.contains("7es72025"));
    // The unchanged lowercase form is the case expander's business, not
    // this rule's.
    assert!(!leet_out.contains("test"));

    // Through the full pipeline "test" still appears via case expansion.
    let candidates = expand(&["test".to_string()], &TargetProfile::default(), &rules);
    assert!(candidates.contains("test"));
}

#[test]
fn bounded_expansion_under_many_seeds() {
    let config = MutationConfig::default();
    let profile = TargetProfile::default();
    let rules = RuleTable::build(&config, &profile);
    let seeds: Vec<String> = (0..100).map(|i| format!("seedword{i}")).collect();

    let mut numeric_out = std::collections::HashSet::new();
    augment_numeric(&seeds, &rules, &mut numeric_out);
    assert!(numeric_out.len() <= config.numeric_seed_limit * rules.numeric_tokens.len() * 2);

    let mut symbol_out = std::collections::HashSet::new();
    augment_symbols(&seeds, &rules, &mut symbol_out);
    assert!(symbol_out.len() <= config.symbol_seed_limit * rules.symbols.len() * 2);
}

#[test]
fn deterministic_output() {
    let profile = TargetProfile {
        name: Some("jane".to_string()),
        surname: Some("doe".to_string()),
        birth_year: Some("1985".to_string()),
        email: Some("jane.doe@example.org".to_string()),
        ..TargetProfile::default()
    };
    let rules = default_rules(&profile);
    let seeds = vec!["winter".to_string(), "tiger".to_string()];

    let run = || {
        let expanded = expand(&seeds, &profile, &rules);
        sanitize(seeds.iter().cloned().chain(expanded))
    };

    assert_eq!(run(), run());
}

#[test]
fn sanitize_fixed_point_on_clean_input() {
    let input = vec!["abc".to_string(), "def".to_string()];
    assert_eq!(sanitize(input.clone()), input);
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(words in proptest::collection::vec(".*", 0..50)) {
        let once = sanitize(words.clone());
        let twice = sanitize(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sanitize_output_respects_charset_and_length(words in proptest::collection::vec(".*", 0..50)) {
        for word in sanitize(words) {
            let len = word.chars().count();
            prop_assert!(len >= 3 && len <= 50);
            prop_assert!(word
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || ALLOWED_SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn sanitize_output_has_no_duplicates(words in proptest::collection::vec("[a-z0-9!@#. ]{0,12}", 0..80)) {
        let output = sanitize(words);
        let unique: std::collections::HashSet<_> = output.iter().cloned().collect();
        prop_assert_eq!(unique.len(), output.len());
    }

    #[test]
    fn sanitize_output_is_sorted(words in proptest::collection::vec("[a-zA-Z0-9_.-]{0,10}", 0..80)) {
        let output = sanitize(words);
        let mut sorted = output.clone();
        sorted.sort_unstable();
        prop_assert_eq!(output, sorted);
    }
}
