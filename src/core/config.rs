//! Configuration types and management for skald-rs.
//!
//! All tunables of the mutation engine live here: the seed limits for the
//! expensive augmenters, the sanitizer length bounds, and the baseline rule
//! material (numeric tokens, symbols, leet substitutions) that
//! [`crate::core::rules::RuleTable`] folds profile facts into.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SkaldError};

/// Main configuration for the skald wordlist engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkaldConfig {
    /// Seed generator (external language-model service) settings
    pub generator: GeneratorConfig,

    /// Mutation and sanitation settings
    pub mutation: MutationConfig,

    /// Output and persistence settings
    pub output: OutputConfig,
}

impl Default for SkaldConfig {
    fn default() -> Self {
        Self::new_with_defaults()
    }
}

impl SkaldConfig {
    /// Construct a configuration using the canonical default values used
    /// across the CLI and public API layers. Keeping this in one place
    /// prevents the configuration surfaces from drifting apart.
    pub(crate) fn new_with_defaults() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            mutation: MutationConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SkaldError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            SkaldError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        self.mutation.validate()?;
        self.generator.validate()?;
        self.output.validate()
    }
}

/// Settings for the external seed generator service.
///
/// The API key is deliberately excluded from serialized configuration; it is
/// only ever read from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Gemini API key, loaded from the `GEMINI_API_KEY` environment variable
    #[serde(skip)]
    pub api_key: String,

    /// Gemini API endpoint
    pub api_endpoint: String,

    /// Model name to query
    pub model: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Whether to make the second, pattern-extension call
    pub enable_extension: bool,

    /// How many of the leading accepted seeds to sample for pattern extension
    pub extension_sample_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 30,
            enable_extension: true,
            extension_sample_size: 15,
        }
    }
}

impl GeneratorConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            SkaldError::config("GEMINI_API_KEY environment variable not set".to_string())
        })?;

        Ok(Self {
            api_key,
            ..Self::default()
        })
    }

    /// Sets the model to query.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Enables or disables the second pattern-extension call.
    pub fn with_extension(mut self, enabled: bool) -> Self {
        self.enable_extension = enabled;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(SkaldError::config_field(
                "generator model must not be empty",
                "generator.model",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(SkaldError::config_field(
                "generator timeout must be at least one second",
                "generator.timeout_secs",
            ));
        }
        Ok(())
    }
}

/// Tunables for the mutation pipeline and sanitizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// How many leading seeds receive numeric augmentation
    pub numeric_seed_limit: usize,

    /// How many leading seeds receive symbol augmentation
    pub symbol_seed_limit: usize,

    /// How many leading seeds receive leet-speak transformation
    pub leet_seed_limit: usize,

    /// Minimum candidate length accepted by the sanitizer
    pub min_word_length: usize,

    /// Maximum candidate length accepted by the sanitizer
    pub max_word_length: usize,

    /// Literal year token used by suffix rules. A configuration value, not
    /// derived from the clock, so identical inputs always yield identical
    /// wordlists.
    pub year_token: String,

    /// Baseline numeric tokens attached by the numeric augmenter
    pub numeric_tokens: Vec<String>,

    /// Symbols attached by the symbol augmenter
    pub symbols: Vec<String>,

    /// Leet-speak substitution map; keys are single lowercase letters
    pub leet_map: BTreeMap<char, char>,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            numeric_seed_limit: 15,
            symbol_seed_limit: 10,
            leet_seed_limit: 12,
            min_word_length: 3,
            max_word_length: 50,
            year_token: "2025".to_string(),
            numeric_tokens: [
                "1", "12", "123", "1234", "2023", "2024", "2025", "01", "00", "21", "22", "23",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            symbols: ["!", "@", "#", "$", "%", "*", "&"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            leet_map: [
                ('a', '@'),
                ('e', '3'),
                ('i', '1'),
                ('o', '0'),
                ('s', '$'),
                ('t', '7'),
                ('g', '6'),
                ('l', '1'),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl MutationConfig {
    fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(SkaldError::config_field(
                "minimum word length must be at least 1",
                "mutation.min_word_length",
            ));
        }
        if self.min_word_length > self.max_word_length {
            return Err(SkaldError::config_field(
                format!(
                    "minimum word length {} exceeds maximum {}",
                    self.min_word_length, self.max_word_length
                ),
                "mutation.min_word_length",
            ));
        }
        if self.year_token.trim().is_empty() {
            return Err(SkaldError::config_field(
                "year token must not be empty",
                "mutation.year_token",
            ));
        }
        for key in self.leet_map.keys() {
            if !key.is_ascii_lowercase() {
                return Err(SkaldError::config_field(
                    format!("leet map key '{key}' is not a lowercase ASCII letter"),
                    "mutation.leet_map",
                ));
            }
        }
        Ok(())
    }
}

/// Output and persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default wordlist file name when none is given on the command line
    pub default_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_file: "skald_wordlist.txt".to_string(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<()> {
        if self.default_file.trim().is_empty() {
            return Err(SkaldError::config_field(
                "default output file must not be empty",
                "output.default_file",
            ));
        }
        Ok(())
    }
}
