//! Target profile: the structured personal facts driving fact-based rules.
//!
//! A profile is collected once (interactively, by the CLI) and then passed
//! by reference into the engine. Every field is optional; comma-joined
//! fields are semantically lists stored as a single delimited string.

use serde::{Deserialize, Serialize};

/// Personal facts about the assessment target.
///
/// All fields hold trimmed, non-empty strings or are absent. Rules that
/// require a missing field skip silently instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Given name
    pub name: Option<String>,
    /// Family name
    pub surname: Option<String>,
    /// Username or handle
    pub nickname: Option<String>,
    /// Birth date as entered (free-form)
    pub birth_date: Option<String>,
    /// Birth year, e.g. "1990"
    pub birth_year: Option<String>,
    /// E-mail address
    pub email: Option<String>,
    /// Phone number as entered; non-digits are stripped by the phone rule
    pub phone: Option<String>,
    /// City of residence
    pub city: Option<String>,
    /// Country of residence
    pub country: Option<String>,
    /// Comma-joined hobby list
    pub hobbies: Option<String>,
    /// Favorite color
    pub favorite_color: Option<String>,
    /// Favorite animal
    pub favorite_animal: Option<String>,
    /// Favorite food
    pub favorite_food: Option<String>,
    /// Comma-joined family member names
    pub family_names: Option<String>,
    /// Comma-joined pet names
    pub pet_names: Option<String>,
    /// Comma-joined friend names
    pub friend_names: Option<String>,
    /// Occupation
    pub job: Option<String>,
    /// Employer name
    pub company: Option<String>,
    /// School name
    pub school: Option<String>,
    /// Comma-joined memorable dates
    pub memorable_dates: Option<String>,
    /// Comma-joined lucky numbers; accepted as opaque tokens
    pub lucky_numbers: Option<String>,
    /// Comma-joined free-form keywords
    pub keywords: Option<String>,
}

impl TargetProfile {
    /// Trim every field and drop the ones that end up empty.
    pub fn normalize(&mut self) {
        for field in self.fields_mut() {
            if let Some(value) = field.take() {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    *field = Some(trimmed.to_string());
                }
            }
        }
    }

    /// True when no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Human-labelled view of the present fields, in declaration order.
    ///
    /// Used both for console display and for building the generator's
    /// natural-language profile description.
    pub fn present_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Name", &self.name),
            ("Surname", &self.surname),
            ("Nickname", &self.nickname),
            ("Birth date", &self.birth_date),
            ("Birth year", &self.birth_year),
            ("E-mail", &self.email),
            ("Phone", &self.phone),
            ("City", &self.city),
            ("Country", &self.country),
            ("Hobbies", &self.hobbies),
            ("Favorite color", &self.favorite_color),
            ("Favorite animal", &self.favorite_animal),
            ("Favorite food", &self.favorite_food),
            ("Family members", &self.family_names),
            ("Pets", &self.pet_names),
            ("Friends", &self.friend_names),
            ("Job", &self.job),
            ("Company", &self.company),
            ("School", &self.school),
            ("Memorable dates", &self.memorable_dates),
            ("Lucky numbers", &self.lucky_numbers),
            ("Keywords", &self.keywords),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }

    fn fields_mut(&mut self) -> [&mut Option<String>; 22] {
        [
            &mut self.name,
            &mut self.surname,
            &mut self.nickname,
            &mut self.birth_date,
            &mut self.birth_year,
            &mut self.email,
            &mut self.phone,
            &mut self.city,
            &mut self.country,
            &mut self.hobbies,
            &mut self.favorite_color,
            &mut self.favorite_animal,
            &mut self.favorite_food,
            &mut self.family_names,
            &mut self.pet_names,
            &mut self.friend_names,
            &mut self.job,
            &mut self.company,
            &mut self.school,
            &mut self.memorable_dates,
            &mut self.lucky_numbers,
            &mut self.keywords,
        ]
    }
}

/// Split a comma-joined list field into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
