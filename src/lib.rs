//! # Skald: Targeted Wordlist Generation Engine
//!
//! Skald turns a small set of facts about a target person into a large,
//! deduplicated set of plausible password candidates for authorized
//! password-recovery and security-assessment work. This library provides:
//!
//! - **Deterministic mutation**: case folding, numeric and symbol
//!   augmentation, leet-speak substitution, and structured personal-fact
//!   combination over a seed vocabulary
//! - **Strict sanitation**: charset and length enforcement with final
//!   deduplicated, lexicographically ordered materialization
//! - **Pluggable seed sources**: a generative-language service (Gemini) or
//!   any canned word list behind the same capability trait
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        API Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Core Engine   │  Mutators      │  Generator   │  I/O       │
//! │                │                │              │            │
//! │ • Profile      │ • Case         │ • SeedSource │ • Wordlist │
//! │ • RuleTable    │ • Numeric      │ • Gemini     │   writer   │
//! │ • Pipeline     │ • Symbol/Leet  │ • Prompts    │            │
//! │ • Config       │ • Facts        │              │            │
//! │                │ • Sanitizer    │              │            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use skald_rs::core::config::SkaldConfig;
//! use skald_rs::core::profile::TargetProfile;
//! use skald_rs::core::rules::RuleTable;
//! use skald_rs::{expand, sanitize};
//!
//! let profile = TargetProfile {
//!     name: Some("ahmet".into()),
//!     surname: Some("yilmaz".into()),
//!     ..TargetProfile::default()
//! };
//!
//! let config = SkaldConfig::default();
//! let rules = RuleTable::build(&config.mutation, &profile);
//! let seeds = vec!["istanbul".to_string(), "galatasaray".to_string()];
//!
//! let candidates = expand(&seeds, &profile, &rules);
//! let wordlist = sanitize(candidates.into_iter().chain(seeds));
//! assert!(wordlist.contains(&"ahmetyilmaz".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Core engine modules
pub mod core {
    //! Core data model, configuration, and the expansion pipeline.

    pub mod config;
    pub mod errors;
    pub mod pipeline;
    pub mod profile;
    pub mod rules;
}

// Candidate mutation rules
pub mod mutators {
    //! Individual mutation and filtering rules applied by the pipeline.

    pub mod case;
    pub mod facts;
    pub mod leet;
    pub mod numeric;
    pub mod sanitize;
    pub mod symbol;
}

// Seed word generation (external collaborator)
pub mod generator;

// I/O and persistence
pub mod io {
    //! Wordlist persistence.

    pub mod writer;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
}

// Re-export primary types for convenience
pub use api::engine::{GenerationReport, GenerationSummary, WordlistEngine};
pub use core::errors::{Result, ResultExt, SkaldError};
pub use core::pipeline::expand;
pub use core::profile::TargetProfile;
pub use core::rules::RuleTable;
pub use generator::{SeedSource, StaticSeedSource};
pub use mutators::sanitize::sanitize;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
