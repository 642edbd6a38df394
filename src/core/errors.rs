//! Error types for the skald-rs library.
//!
//! The mutation engine itself has no fatal paths: it degrades by skipping
//! seeds, sub-rules, or candidates. The error types here cover the
//! surrounding concerns: configuration loading, the seed generator
//! transport, and wordlist persistence.

use std::io;

use thiserror::Error;

/// Main result type for skald operations.
pub type Result<T> = std::result::Result<T, SkaldError>;

/// Error type for all skald operations.
#[derive(Error, Debug)]
pub enum SkaldError {
    /// I/O related errors (wordlist output, config files)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Seed generator errors (transport failures, malformed responses)
    #[error("Generator error: {message}")]
    Generator {
        /// Error description
        message: String,
        /// Model that was being queried (if known)
        model: Option<String>,
        /// Underlying transport error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

impl SkaldError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new generator error
    pub fn generator(message: impl Into<String>) -> Self {
        Self::Generator {
            message: message.into(),
            model: None,
            source: None,
        }
    }

    /// Create a new generator error naming the queried model
    pub fn generator_for_model(message: impl Into<String>, model: impl Into<String>) -> Self {
        Self::Generator {
            message: message.into(),
            model: Some(model.into()),
            source: None,
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Internal { context: ctx, .. } => {
                *ctx = Some(context.into());
            }
            _ => {} // Other variants handle context differently
        }
        self
    }
}

// Implement From traits for common error types
impl From<io::Error> for SkaldError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_yaml::Error> for SkaldError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: "YAML serialization failed".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for SkaldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for SkaldError {
    fn from(err: reqwest::Error) -> Self {
        Self::Generator {
            message: "HTTP request to seed generator failed".to_string(),
            model: None,
            source: Some(Box::new(err)),
        }
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<SkaldError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SkaldError::config("Invalid configuration");
        assert!(matches!(err, SkaldError::Config { .. }));

        let err = SkaldError::generator_for_model("timeout", "gemini-2.5-flash");
        assert!(matches!(err, SkaldError::Generator { model: Some(_), .. }));
    }

    #[test]
    fn test_error_with_context() {
        let err = SkaldError::internal("Something went wrong").with_context("During wordlist save");

        if let SkaldError::Internal { context, .. } = err {
            assert_eq!(context, Some("During wordlist save".to_string()));
        } else {
            panic!("Expected Internal error");
        }
    }

    #[test]
    fn test_error_display() {
        let err = SkaldError::config_field("value out of range", "mutation.min_word_length");
        assert_eq!(err.to_string(), "Configuration error: value out of range");
    }

    #[test]
    fn test_result_extension() {
        let result: std::result::Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File not found",
        ));

        let skald_result = result.context("Failed to read configuration file");
        assert!(skald_result.is_err());
    }
}
