//! Final charset/length filtering and ordered materialization.
//!
//! Accumulation and ordering are two separate steps: survivors are
//! deduplicated in a hash set first, then sorted into the final list, since
//! no single container gives both exact-value dedup and lexicographic
//! iteration.

use std::collections::HashSet;

/// Symbols allowed in final candidates, alongside ASCII letters and digits.
pub const ALLOWED_SYMBOLS: &str = "@#$%&*!._-";

/// Length bounds applied when calling [`sanitize`] directly.
pub const DEFAULT_MIN_LENGTH: usize = 3;
/// See [`DEFAULT_MIN_LENGTH`].
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Charset and length filter producing the final ordered wordlist.
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer {
    min_length: usize,
    max_length: usize,
}

impl Sanitizer {
    /// Create a sanitizer with explicit length bounds.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Trim every candidate, keep those within the length bounds whose
    /// characters all come from the allowed set, deduplicate by exact
    /// value, and return them in ascending code-point order.
    pub fn run<I>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let survivors: HashSet<String> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let trimmed = candidate.trim();
                self.accepts(trimmed).then(|| trimmed.to_string())
            })
            .collect();

        let mut wordlist: Vec<String> = survivors.into_iter().collect();
        wordlist.sort_unstable();
        wordlist
    }

    fn accepts(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.min_length && len <= self.max_length && word.chars().all(is_allowed_char)
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }
}

/// Run the sanitizer with the default length bounds.
pub fn sanitize<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    Sanitizer::default().run(candidates)
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ALLOWED_SYMBOLS.contains(c)
}
