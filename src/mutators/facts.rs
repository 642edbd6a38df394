//! Structured combinations from personal facts.
//!
//! Three independent sub-rules: name+surname, e-mail local part, and phone
//! digits. Each activates only when its required fields are present; a
//! missing field skips the sub-rule rather than erroring.

use std::collections::HashSet;

use crate::core::profile::TargetProfile;
use crate::core::rules::RuleTable;

/// Run every fact sub-rule whose required fields are present.
pub fn combine_facts(profile: &TargetProfile, rules: &RuleTable, candidates: &mut HashSet<String>) {
    if let (Some(name), Some(surname)) = (profile.name.as_deref(), profile.surname.as_deref()) {
        name_combinations(name, surname, rules, candidates);
    }
    if let Some(email) = profile.email.as_deref() {
        email_variations(email, rules, candidates);
    }
    if let Some(phone) = profile.phone.as_deref() {
        phone_variations(phone, candidates);
    }
}

/// Concatenations, joined forms, and initial forms of name and surname,
/// plus the full name decorated with the common suffix set.
fn name_combinations(name: &str, surname: &str, rules: &RuleTable, candidates: &mut HashSet<String>) {
    let name = name.trim().to_lowercase();
    let surname = surname.trim().to_lowercase();
    if name.is_empty() || surname.is_empty() {
        return;
    }

    let name_initial = initial(&name);
    let surname_initial = initial(&surname);
    let full_name = format!("{name}{surname}");

    candidates.insert(format!("{surname}{name}"));
    candidates.insert(format!("{name}.{surname}"));
    candidates.insert(format!("{name}_{surname}"));
    candidates.insert(format!("{name_initial}{surname}"));
    candidates.insert(format!("{name}{surname_initial}"));
    candidates.insert(format!("{name_initial}{surname_initial}"));
    for suffix in ["123", rules.year_token.as_str(), "01"] {
        candidates.insert(format!("{full_name}{suffix}"));
    }
    candidates.insert(full_name);
}

/// The e-mail local part, a punctuation-free variant of it, and that
/// variant with the common suffixes. Requires an '@' in the address.
fn email_variations(email: &str, rules: &RuleTable, candidates: &mut HashSet<String>) {
    let Some((local_part, _)) = email.split_once('@') else {
        return;
    };

    let username = local_part.to_lowercase();
    let clean: String = username.chars().filter(|c| *c != '.' && *c != '_').collect();
    for suffix in ["123", rules.year_token.as_str()] {
        candidates.insert(format!("{clean}{suffix}"));
    }
    candidates.insert(username);
    candidates.insert(clean);
}

/// Digit runs from the phone number: last four, last six, and the first
/// four of the leading-zero-stripped form. Fewer than six digits carries
/// too little signal to emit anything.
fn phone_variations(phone: &str, candidates: &mut HashSet<String>) {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 6 {
        return;
    }

    candidates.insert(digits[digits.len() - 4..].to_string());
    candidates.insert(digits[digits.len() - 6..].to_string());

    let stripped = digits.trim_start_matches('0');
    if stripped.len() >= 4 {
        candidates.insert(stripped[..4].to_string());
    }
}

fn initial(word: &str) -> String {
    word.chars().take(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MutationConfig;

    fn table() -> RuleTable {
        RuleTable::build(&MutationConfig::default(), &TargetProfile::default())
    }

    fn run(profile: &TargetProfile) -> HashSet<String> {
        let mut candidates = HashSet::new();
        combine_facts(profile, &table(), &mut candidates);
        candidates
    }

    #[test]
    fn test_name_combinations() {
        let profile = TargetProfile {
            name: Some("Ahmet".to_string()),
            surname: Some("Yilmaz".to_string()),
            ..TargetProfile::default()
        };
        let candidates = run(&profile);

        for expected in [
            "ahmetyilmaz",
            "yilmazahmet",
            "ahmet.yilmaz",
            "ahmet_yilmaz",
            "ayilmaz",
            "ahmety",
            "ay",
            "ahmetyilmaz123",
            "ahmetyilmaz2025",
            "ahmetyilmaz01",
        ] {
            assert!(candidates.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_name_without_surname_is_skipped() {
        let profile = TargetProfile {
            name: Some("ahmet".to_string()),
            ..TargetProfile::default()
        };
        assert!(run(&profile).is_empty());
    }

    #[test]
    fn test_email_variations() {
        let profile = TargetProfile {
            email: Some("Ahmet.Yilmaz_90@example.com".to_string()),
            ..TargetProfile::default()
        };
        let candidates = run(&profile);

        assert!(candidates.contains("ahmet.yilmaz_90"));
        assert!(candidates.contains("ahmetyilmaz90"));
        assert!(candidates.contains("ahmetyilmaz90123"));
        assert!(candidates.contains("ahmetyilmaz902025"));
    }

    #[test]
    fn test_email_without_at_sign_is_skipped() {
        let profile = TargetProfile {
            email: Some("not-an-address".to_string()),
            ..TargetProfile::default()
        };
        assert!(run(&profile).is_empty());
    }

    #[test]
    fn test_phone_variations() {
        let profile = TargetProfile {
            phone: Some("+90 532 123 45 67".to_string()),
            ..TargetProfile::default()
        };
        let candidates = run(&profile);

        assert!(candidates.contains("4567"));
        assert!(candidates.contains("234567"));
        // Digits "905321234567": leading zeros already absent, first four.
        assert!(candidates.contains("9053"));
    }

    #[test]
    fn test_phone_with_few_digits_emits_nothing() {
        let profile = TargetProfile {
            phone: Some("12345".to_string()),
            ..TargetProfile::default()
        };
        assert!(run(&profile).is_empty());
    }

    #[test]
    fn test_phone_leading_zero_stripping() {
        let profile = TargetProfile {
            phone: Some("0000123".to_string()),
            ..TargetProfile::default()
        };
        let candidates = run(&profile);

        assert!(candidates.contains("0123"));
        assert!(candidates.contains("000123"));
        // "123" after zero stripping is under four digits, so no prefix form.
        assert!(!candidates.contains("123"));
    }
}
