//! Prompt construction and response parsing for the seed generator.

use crate::core::profile::TargetProfile;

/// Render the present profile fields as a labelled line list for prompt
/// embedding.
pub fn profile_summary(profile: &TargetProfile) -> String {
    profile
        .present_fields()
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking the model for an initial seed vocabulary.
pub fn seed_generation_prompt(profile: &TargetProfile) -> String {
    format!(
        "Based on the following personal information, produce words that could \
plausibly appear in this person's passwords:\n\n\
{}\n\n\
Follow these rules:\n\
1. Write each word on its own line\n\
2. List only the words, no commentary\n\
3. Use ASCII characters only; transliterate accented letters\n\
4. Suggest at least 50 words\n\
5. Include words from these categories:\n\
   - Name and surname combinations\n\
   - Birth year and dates\n\
   - City and country names\n\
   - Job and company names\n\
   - Hobbies and interests\n\
   - Family member names\n\
   - Pet names\n\
   - Words from the e-mail address\n\
   - Digit runs from the phone number\n\n\
Example format:\n\
ahmet1905\n\
yilmaz123\n\
ahmetyilmaz53\n\
istanbul\n\
1990\n\
engineer",
        profile_summary(profile)
    )
}

/// Prompt asking the model to extend the patterns visible in a seed sample.
pub fn pattern_extension_prompt(sample: &[String]) -> String {
    format!(
        "Analyze the patterns in this word list and suggest similar password \
combinations:\n\n\
{}\n\n\
Follow these rules:\n\
1. Suggest new combinations following the observed patterns\n\
2. Add common password shapes (word+number, number+word)\n\
3. List only the words, one per line\n\
4. Suggest at least 25 new words\n\
5. Use ASCII characters only\n\n\
Examples:\n\
- If \"ahmet\" appears: \"ahmet123\", \"123ahmet\", \"ahmet2024\"\n\
- If \"istanbul\" appears: \"istanbul34\", \"34istanbul\"\n\
- If a job title appears: job title + common numbers",
        sample.join("\n")
    )
}

/// Split a model response into trimmed, non-empty word lines.
///
/// No shape validation happens here; the sanitizer enforces the output
/// contract later.
pub fn parse_word_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
