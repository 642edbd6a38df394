//! Gemini API client and wire types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::GeneratorConfig;
use crate::core::errors::{Result, SkaldError};
use crate::core::profile::TargetProfile;
use crate::generator::prompt::{parse_word_lines, pattern_extension_prompt, seed_generation_prompt};
use crate::generator::SeedSource;

/// Gemini API request structure
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// Conversation contents
    pub contents: Vec<GeminiContent>,
    /// Generation parameters
    #[serde(rename = "generationConfig")]
    pub generation_config: GeminiGenerationConfig,
}

/// Content block for a Gemini API request.
#[derive(Debug, Serialize)]
pub struct GeminiContent {
    /// Content parts
    pub parts: Vec<GeminiPart>,
}

/// Text part within a Gemini content block.
#[derive(Debug, Serialize)]
pub struct GeminiPart {
    /// Part text
    pub text: String,
}

/// Generation configuration for Gemini API requests.
#[derive(Debug, Serialize)]
pub struct GeminiGenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Top-K sampling parameter
    #[serde(rename = "topK")]
    pub top_k: i32,
    /// Top-P sampling parameter
    #[serde(rename = "topP")]
    pub top_p: f32,
    /// Response token cap
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: i32,
    /// Requested response MIME type
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
}

/// Response from the Gemini API.
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Candidate completions
    pub candidates: Vec<GeminiCandidate>,
}

/// Candidate response from Gemini.
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// Candidate content
    pub content: GeminiResponseContent,
}

/// Content within a Gemini response candidate.
#[derive(Debug, Deserialize)]
pub struct GeminiResponseContent {
    /// Content parts
    pub parts: Vec<GeminiResponsePart>,
}

/// Text part within a Gemini response.
#[derive(Debug, Deserialize)]
pub struct GeminiResponsePart {
    /// Part text
    pub text: String,
}

/// Seed source backed by the Gemini `generateContent` endpoint.
pub struct GeminiSeedGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl GeminiSeedGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Query the configured model with a prompt and return the raw text of
    /// the first candidate.
    async fn query(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.config.api_endpoint, self.config.model, self.config.api_key
        );

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 4096,
                response_mime_type: "text/plain".to_string(),
            },
        };

        debug!(model = %self.config.model, "querying seed generator");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SkaldError::generator_for_model(
                format!("API returned {status}: {error_text}"),
                self.config.model.clone(),
            ));
        }

        let gemini_response: GeminiResponse = response.json().await?;

        let response_text = gemini_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| SkaldError::generator("No candidates in Gemini response"))?
            .content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| SkaldError::generator("No parts in Gemini response"))?
            .text;

        Ok(response_text)
    }
}

#[async_trait]
impl SeedSource for GeminiSeedGenerator {
    async fn generate_seeds(&self, profile: &TargetProfile) -> Result<Vec<String>> {
        let text = self.query(&seed_generation_prompt(profile)).await?;
        let seeds = parse_word_lines(&text);
        debug!(count = seeds.len(), "seed generation complete");
        Ok(seeds)
    }

    async fn extend_patterns(&self, sample: &[String]) -> Result<Vec<String>> {
        if sample.is_empty() {
            return Ok(Vec::new());
        }
        let text = self.query(&pattern_extension_prompt(sample)).await?;
        let seeds = parse_word_lines(&text);
        debug!(count = seeds.len(), "pattern extension complete");
        Ok(seeds)
    }
}
