//! Engine-level integration tests with canned and failing seed sources.

use async_trait::async_trait;

use skald_rs::api::engine::WordlistEngine;
use skald_rs::core::config::SkaldConfig;
use skald_rs::core::errors::{Result, SkaldError};
use skald_rs::core::profile::TargetProfile;
use skald_rs::generator::{SeedSource, StaticSeedSource};
use skald_rs::io::writer::write_wordlist;

/// A source whose every call fails, for degradation testing.
struct FailingSource;

#[async_trait]
impl SeedSource for FailingSource {
    async fn generate_seeds(&self, _profile: &TargetProfile) -> Result<Vec<String>> {
        Err(SkaldError::generator("simulated transport failure"))
    }

    async fn extend_patterns(&self, _sample: &[String]) -> Result<Vec<String>> {
        Err(SkaldError::generator("simulated transport failure"))
    }
}

fn rich_profile() -> TargetProfile {
    TargetProfile {
        name: Some("ahmet".to_string()),
        surname: Some("yilmaz".to_string()),
        birth_year: Some("1990".to_string()),
        email: Some("ahmet.yilmaz@example.com".to_string()),
        phone: Some("+90 532 123 45 67".to_string()),
        ..TargetProfile::default()
    }
}

#[tokio::test]
async fn full_run_with_canned_seeds() {
    let seeds = vec![
        "istanbul".to_string(),
        "galatasaray".to_string(),
        "kahve".to_string(),
    ];
    let engine =
        WordlistEngine::new(SkaldConfig::default(), StaticSeedSource::new(seeds)).unwrap();

    let report = engine.generate(&rich_profile()).await.unwrap();

    // Seeds survive sanitation, mutations and fact combos are present.
    assert!(report.words.contains(&"istanbul".to_string()));
    assert!(report.words.contains(&"Istanbul".to_string()));
    assert!(report.words.contains(&"istanbul1990".to_string()));
    assert!(report.words.contains(&"istanbul90".to_string()));
    assert!(report.words.contains(&"ahmetyilmaz".to_string()));
    assert!(report.words.contains(&"4567".to_string()));

    // Output contract: sorted, unique, charset-clean.
    let mut sorted = report.words.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(report.words, sorted);
    assert_eq!(report.summary.final_count, report.words.len());
}

#[tokio::test]
async fn generator_failure_degrades_to_fact_only_wordlist() {
    let engine = WordlistEngine::new(SkaldConfig::default(), FailingSource).unwrap();

    let report = engine.generate(&rich_profile()).await.unwrap();

    assert_eq!(report.summary.seed_count, 0);
    assert_eq!(report.summary.extension_count, 0);
    assert!(!report.words.is_empty());
    assert!(report.words.contains(&"ahmetyilmaz123".to_string()));
}

#[tokio::test]
async fn empty_seeds_and_empty_profile_yield_empty_wordlist() {
    let engine =
        WordlistEngine::new(SkaldConfig::default(), StaticSeedSource::default()).unwrap();

    let report = engine.generate(&TargetProfile::default()).await.unwrap();

    assert!(report.words.is_empty());
    assert_eq!(report.summary.final_count, 0);
}

#[tokio::test]
async fn disabled_extension_means_zero_extension_seeds() {
    let mut config = SkaldConfig::default();
    config.generator.enable_extension = false;

    let seeds = vec!["istanbul".to_string()];
    let engine = WordlistEngine::new(config, StaticSeedSource::new(seeds)).unwrap();

    let report = engine.generate(&rich_profile()).await.unwrap();
    assert_eq!(report.summary.extension_count, 0);
}

#[tokio::test]
async fn report_round_trips_to_disk() {
    let engine = WordlistEngine::new(
        SkaldConfig::default(),
        StaticSeedSource::new(vec!["winter".to_string()]),
    )
    .unwrap();
    let report = engine.generate(&rich_profile()).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordlist.txt");
    let count = write_wordlist(&path, &report.words).unwrap();
    assert_eq!(count, report.words.len());

    let lines: Vec<String> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, report.words);
}
