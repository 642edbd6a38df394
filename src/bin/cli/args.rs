//! CLI Argument Structures
//!
//! This module contains all CLI argument definitions and command structures
//! used by the skald CLI binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// AI-Assisted Targeted Wordlist Generator
#[derive(Parser)]
#[command(name = "skald")]
#[command(version = VERSION)]
#[command(about = "🪶 Skald - AI-Assisted Targeted Wordlist Generator")]
#[command(long_about = "
Generate personalized password-candidate wordlists for authorized
password-recovery and security-assessment work. Skald interviews you about
the target, asks a generative language model for seed words, and runs a
deterministic mutation engine over the result.

Common Usage:

  # Interactive generation (requires GEMINI_API_KEY)
  skald generate

  # Use canned seeds instead of the language model
  skald generate --seeds seeds.txt

  # Write to a specific file
  skald generate --output acme_audit.txt

  # Timestamped output file
  skald generate --timestamp

  # Manage configuration
  skald print-default-config
  skald init-config
  skald validate-config skald.yml

Use only against accounts and systems you are authorized to assess.
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a targeted wordlist interactively
    Generate(GenerateArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a skald configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Arguments for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    /// Configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output wordlist file [default: from configuration]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name the output file with the current date and time
    #[arg(long, conflicts_with = "output")]
    pub timestamp: bool,

    /// Read seed words from a file (one per line) instead of querying the
    /// language model; no API key needed
    #[arg(long)]
    pub seeds: Option<PathBuf>,

    /// Skip the second, pattern-extension model call
    #[arg(long)]
    pub no_extension: bool,

    /// Gemini model to query (overrides configuration)
    #[arg(long)]
    pub model: Option<String>,
}

/// Arguments for the init-config command
#[derive(Args)]
pub struct InitConfigArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "skald.yml")]
    pub output: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the validate-config command
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    pub config: PathBuf,
}
