//! Case variation expansion.

use std::collections::HashSet;

/// Emit lowercase, uppercase, and capitalized forms of every seed of
/// length two or more. Shorter seeds are skipped here but may still be
/// picked up by other rules.
pub fn expand_case(seeds: &[String], candidates: &mut HashSet<String>) {
    for word in seeds {
        if word.chars().count() < 2 {
            continue;
        }
        candidates.insert(word.to_lowercase());
        candidates.insert(word.to_uppercase());
        candidates.insert(capitalize(word));
    }
}

/// First character uppercased, remainder lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_case_variants() {
        let mut candidates = HashSet::new();
        expand_case(&["istanbul".to_string()], &mut candidates);

        assert!(candidates.contains("istanbul"));
        assert!(candidates.contains("ISTANBUL"));
        assert!(candidates.contains("Istanbul"));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_single_char_seed_is_skipped() {
        let mut candidates = HashSet::new();
        expand_case(&["x".to_string()], &mut candidates);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_capitalize_mixed_case_input() {
        assert_eq!(capitalize("gALAtasaray"), "Galatasaray");
        assert_eq!(capitalize(""), "");
    }
}
