//! Console display helpers: banner, profile summary, statistics, and the
//! completion message.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use skald_rs::api::engine::GenerationSummary;
use skald_rs::core::profile::TargetProfile;

/// Print the startup banner.
pub fn print_banner(model: &str) {
    let rule = "=".repeat(60);
    println!("{}", rule.cyan());
    println!("{}", "    🪶  SKALD WORDLIST GENERATOR  🪶".bright_yellow().bold());
    println!("{}", rule.cyan());
    println!(
        "{} {}",
        "✨ AI-assisted personalized wordlist generation".bright_green(),
        format!("(model: {model})").dimmed()
    );
    println!(
        "{} {}",
        "📅 Date:".bright_blue(),
        chrono::Local::now().format("%d/%m/%Y %H:%M")
    );
    println!("{}", rule.cyan());
}

/// Show the fields collected during the interview.
pub fn show_collected_info(profile: &TargetProfile) {
    let fields = profile.present_fields();

    if fields.is_empty() {
        println!(
            "{}",
            "⚠️  No information entered; the wordlist will be generic.".bright_yellow()
        );
        return;
    }

    println!();
    println!(
        "{} {}",
        "✅ Collected information:".bright_green().bold(),
        format!("({} fields)", fields.len()).dimmed()
    );
    for (label, value) in fields {
        let display_value = if value.chars().count() > 30 {
            format!("{}...", value.chars().take(30).collect::<String>())
        } else {
            value.to_string()
        };
        println!("   {} {}: {}", "├─".dimmed(), label, display_value.cyan());
    }
}

/// Show per-stage candidate counts for a finished run.
pub fn show_statistics(summary: &GenerationSummary) {
    /// Row type for the statistics table.
    #[derive(Tabled)]
    struct StatRow {
        stage: String,
        candidates: usize,
    }

    let rows = vec![
        StatRow {
            stage: "Generator seeds".to_string(),
            candidates: summary.seed_count,
        },
        StatRow {
            stage: "Mutation output".to_string(),
            candidates: summary.expanded_count,
        },
        StatRow {
            stage: "Pattern extension".to_string(),
            candidates: summary.extension_count,
        },
        StatRow {
            stage: "Raw total".to_string(),
            candidates: summary.raw_total(),
        },
        StatRow {
            stage: "Final wordlist".to_string(),
            candidates: summary.final_count,
        },
    ];

    println!();
    println!("{}", "📊 Generation statistics".bright_cyan().bold());
    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{table}");
}

/// Print the completion message after a successful save.
pub fn show_completion(path: &std::path::Path, count: usize) {
    let rule = "=".repeat(60);
    println!();
    println!("{}", rule.bright_green());
    println!("{}", "    🎉 WORDLIST CREATED 🎉".bright_yellow().bold());
    println!("{}", rule.bright_green());
    println!("{} {}", "📁 File:".bright_cyan(), path.display());
    println!("{} {}", "📊 Words:".bright_cyan(), count);
    println!(
        "{} {}",
        "📅 Created:".bright_cyan(),
        chrono::Local::now().format("%d/%m/%Y %H:%M:%S")
    );
}
