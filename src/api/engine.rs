//! Main wordlist engine implementation.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::config::SkaldConfig;
use crate::core::errors::Result;
use crate::core::pipeline::expand;
use crate::core::profile::TargetProfile;
use crate::core::rules::RuleTable;
use crate::generator::SeedSource;
use crate::mutators::sanitize::Sanitizer;

/// Per-stage candidate counts for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Seeds accepted from the generator
    pub seed_count: usize,
    /// Candidates produced by the mutation rules
    pub expanded_count: usize,
    /// Extra seeds from the pattern-extension call
    pub extension_count: usize,
    /// Final sanitized wordlist length
    pub final_count: usize,
}

impl GenerationSummary {
    /// Total raw candidates before sanitation.
    pub fn raw_total(&self) -> usize {
        self.seed_count + self.expanded_count + self.extension_count
    }
}

/// A finished run: the ordered wordlist plus its statistics.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Sanitized, deduplicated, lexicographically ordered candidates
    pub words: Vec<String>,
    /// Per-stage counts
    pub summary: GenerationSummary,
}

/// Main skald wordlist engine.
///
/// Owns a validated configuration and a seed source, and runs the full
/// seed → expand → extend → sanitize pipeline. Generator failures are
/// tolerated at every step: a failed call degrades to an empty seed list
/// and the run continues on personal-fact combinations alone.
pub struct WordlistEngine<S> {
    config: SkaldConfig,
    source: S,
}

impl<S: SeedSource> WordlistEngine<S> {
    /// Create a new engine with the given configuration and seed source.
    pub fn new(config: SkaldConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    /// Run a full generation pass for the given profile.
    pub async fn generate(&self, profile: &TargetProfile) -> Result<GenerationReport> {
        info!("starting wordlist generation");

        let seeds = match self.source.generate_seeds(profile).await {
            Ok(seeds) => seeds,
            Err(err) => {
                warn!(error = %err, "seed generation failed; continuing without seeds");
                Vec::new()
            }
        };

        let rules = RuleTable::build(&self.config.mutation, profile);
        let expanded = expand(&seeds, profile, &rules);

        let extension = if self.config.generator.enable_extension && !seeds.is_empty() {
            let sample: Vec<String> = seeds
                .iter()
                .take(self.config.generator.extension_sample_size)
                .cloned()
                .collect();
            match self.source.extend_patterns(&sample).await {
                Ok(words) => words,
                Err(err) => {
                    warn!(error = %err, "pattern extension failed; continuing without it");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let summary_counts = (seeds.len(), expanded.len(), extension.len());

        let sanitizer = Sanitizer::new(
            self.config.mutation.min_word_length,
            self.config.mutation.max_word_length,
        );
        let words = sanitizer.run(
            seeds
                .into_iter()
                .chain(expanded)
                .chain(extension),
        );

        let summary = GenerationSummary {
            seed_count: summary_counts.0,
            expanded_count: summary_counts.1,
            extension_count: summary_counts.2,
            final_count: words.len(),
        };

        info!(
            seeds = summary.seed_count,
            expanded = summary.expanded_count,
            extension = summary.extension_count,
            final_count = summary.final_count,
            "wordlist generation complete"
        );

        Ok(GenerationReport { words, summary })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SkaldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::StaticSeedSource;

    fn profile() -> TargetProfile {
        TargetProfile {
            name: Some("ahmet".to_string()),
            surname: Some("yilmaz".to_string()),
            phone: Some("+90 532 123 45 67".to_string()),
            ..TargetProfile::default()
        }
    }

    #[tokio::test]
    async fn test_generate_with_canned_seeds() {
        let source = StaticSeedSource::new(vec!["istanbul".to_string()]);
        let engine = WordlistEngine::new(SkaldConfig::default(), source).unwrap();

        let report = engine.generate(&profile()).await.unwrap();

        assert!(report.words.contains(&"istanbul".to_string()));
        assert!(report.words.contains(&"ahmetyilmaz".to_string()));
        assert!(report.words.contains(&"4567".to_string()));
        assert_eq!(report.summary.final_count, report.words.len());
        assert_eq!(report.summary.extension_count, 0);
    }

    #[tokio::test]
    async fn test_generate_without_seeds_still_produces_facts() {
        let engine =
            WordlistEngine::new(SkaldConfig::default(), StaticSeedSource::default()).unwrap();

        let report = engine.generate(&profile()).await.unwrap();

        assert_eq!(report.summary.seed_count, 0);
        assert!(!report.words.is_empty());
        assert!(report.words.contains(&"ahmetyilmaz123".to_string()));
    }

    #[tokio::test]
    async fn test_output_is_sorted_and_unique() {
        let source = StaticSeedSource::new(vec!["test".to_string(), "test".to_string()]);
        let engine = WordlistEngine::new(SkaldConfig::default(), source).unwrap();

        let report = engine.generate(&profile()).await.unwrap();
        let mut sorted = report.words.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(report.words, sorted);
    }
}
