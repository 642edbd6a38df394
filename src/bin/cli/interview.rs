//! Interactive target-profile interview.
//!
//! Every question may be skipped with an empty answer; skipped fields stay
//! absent in the profile and their rules are simply never activated.

use dialoguer::{theme::ColorfulTheme, Input};
use owo_colors::OwoColorize;

use skald_rs::core::profile::TargetProfile;

/// Collect a target profile from the terminal, section by section.
pub fn collect_profile() -> anyhow::Result<TargetProfile> {
    let theme = ColorfulTheme::default();

    println!(
        "{}",
        "📋 Enter what you know about the target (press Enter to skip a field)"
            .bright_yellow()
    );
    println!();

    section("Personal");
    let name = ask(&theme, "First name")?;
    let surname = ask(&theme, "Surname")?;
    let nickname = ask(&theme, "Username / nickname")?;
    let birth_date = ask(&theme, "Birth date (DD/MM/YYYY)")?;
    let birth_year = ask(&theme, "Birth year")?;

    section("Contact");
    let email = ask(&theme, "E-mail")?;
    let phone = ask(&theme, "Phone")?;

    section("Location");
    let city = ask(&theme, "City")?;
    let country = ask(&theme, "Country")?;

    section("Interests");
    let hobbies = ask(&theme, "Hobbies (comma separated)")?;
    let favorite_color = ask(&theme, "Favorite color")?;
    let favorite_animal = ask(&theme, "Favorite animal")?;
    let favorite_food = ask(&theme, "Favorite food")?;

    section("Family & Friends");
    let family_names = ask(&theme, "Family member names (comma separated)")?;
    let pet_names = ask(&theme, "Pet names (comma separated)")?;
    let friend_names = ask(&theme, "Friend names (comma separated)")?;

    section("Work & Education");
    let job = ask(&theme, "Job")?;
    let company = ask(&theme, "Company")?;
    let school = ask(&theme, "School")?;

    section("Special");
    let memorable_dates = ask(&theme, "Memorable dates (comma separated)")?;
    let lucky_numbers = ask(&theme, "Lucky numbers (comma separated)")?;
    let keywords = ask(&theme, "Special keywords (comma separated)")?;

    let mut profile = TargetProfile {
        name,
        surname,
        nickname,
        birth_date,
        birth_year,
        email,
        phone,
        city,
        country,
        hobbies,
        favorite_color,
        favorite_animal,
        favorite_food,
        family_names,
        pet_names,
        friend_names,
        job,
        company,
        school,
        memorable_dates,
        lucky_numbers,
        keywords,
    };
    profile.normalize();
    Ok(profile)
}

fn section(title: &str) {
    println!();
    println!("{} {}", "🔸".bright_magenta(), title.bright_magenta().bold());
}

fn ask(theme: &ColorfulTheme, prompt: &str) -> anyhow::Result<Option<String>> {
    let answer: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let trimmed = answer.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}
