//! Seed word generation - language-model integration for seed vocabulary.
//!
//! The mutation engine is deterministic; the seed vocabulary it feeds on is
//! not. This module abstracts the seed supplier behind the [`SeedSource`]
//! capability trait so the core can be exercised with canned lists and the
//! CLI can plug in the Gemini-backed implementation. A source may be
//! consulted twice per run: once for the initial seeds, once with a small
//! sample of accepted seeds to extend the observed patterns. The second
//! call is optional and its absence means zero additional seeds.

pub mod gemini;
pub mod prompt;

use async_trait::async_trait;

use crate::core::errors::Result;
use crate::core::profile::TargetProfile;

// Re-export the HTTP-backed implementation
pub use gemini::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiResponse, GeminiResponseContent, GeminiResponsePart, GeminiSeedGenerator,
};

/// A supplier of seed words for the mutation engine.
///
/// Implementations make no determinism promises; callers must treat every
/// failure as an empty seed list and carry on (the engine still produces
/// its personal-fact combinations).
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Produce seed words inspired by the profile, highest-confidence first.
    async fn generate_seeds(&self, profile: &TargetProfile) -> Result<Vec<String>>;

    /// Produce additional seed words following the patterns observed in
    /// `sample`. Implementations without this capability return an empty
    /// list.
    async fn extend_patterns(&self, sample: &[String]) -> Result<Vec<String>>;
}

/// A canned seed source for tests and offline operation.
#[derive(Debug, Clone, Default)]
pub struct StaticSeedSource {
    seeds: Vec<String>,
}

impl StaticSeedSource {
    /// Create a source that always returns the given seeds.
    pub fn new(seeds: Vec<String>) -> Self {
        Self { seeds }
    }
}

#[async_trait]
impl SeedSource for StaticSeedSource {
    async fn generate_seeds(&self, _profile: &TargetProfile) -> Result<Vec<String>> {
        Ok(self.seeds.clone())
    }

    async fn extend_patterns(&self, _sample: &[String]) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
