//! Command execution logic.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::info;

use skald_rs::api::engine::WordlistEngine;
use skald_rs::core::config::SkaldConfig;
use skald_rs::core::profile::TargetProfile;
use skald_rs::generator::{GeminiSeedGenerator, SeedSource, StaticSeedSource};
use skald_rs::io::writer::{timestamped_filename, write_wordlist};

use crate::cli::args::{GenerateArgs, InitConfigArgs, ValidateConfigArgs};
use crate::cli::display::{print_banner, show_collected_info, show_completion, show_statistics};
use crate::cli::interview::collect_profile;

/// Run the interactive generation flow.
pub async fn generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = load_configuration(args.config.as_deref()).await?;
    if let Some(model) = &args.model {
        config.generator.model = model.clone();
    }
    if args.no_extension {
        config.generator.enable_extension = false;
    }

    print_banner(&config.generator.model);
    println!();

    let profile = collect_profile()?;
    show_collected_info(&profile);

    let output_path = resolve_output_path(&args, &config);

    if let Some(seeds_path) = &args.seeds {
        let seeds = read_seed_file(seeds_path)?;
        info!(count = seeds.len(), "using canned seeds from file");
        let engine = WordlistEngine::new(config, StaticSeedSource::new(seeds))?;
        run_generation(engine, &profile, &output_path).await
    } else {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            anyhow::anyhow!(
                "GEMINI_API_KEY environment variable not set. \
                 Get a key at https://aistudio.google.com/ or pass --seeds <FILE>."
            )
        })?;
        config.generator.api_key = api_key;
        let source = GeminiSeedGenerator::new(config.generator.clone())?;
        let engine = WordlistEngine::new(config, source)?;
        run_generation(engine, &profile, &output_path).await
    }
}

async fn run_generation<S: SeedSource>(
    engine: WordlistEngine<S>,
    profile: &TargetProfile,
    output_path: &Path,
) -> anyhow::Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.blue} {msg}")?);
    pb.set_message("Generating seeds and mutations...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = engine.generate(profile).await?;

    pb.finish_with_message(format!("{} candidates generated", report.summary.final_count));

    show_statistics(&report.summary);

    if report.words.is_empty() {
        println!(
            "{}",
            "⚠️  Nothing survived sanitation; no file written. \
             Add more profile facts or check the generator."
                .bright_yellow()
        );
        return Ok(());
    }

    let count = write_wordlist(output_path, &report.words)?;
    show_completion(output_path, count);
    Ok(())
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default skald configuration".dimmed());
    println!(
        "{}",
        "# Save this to a file and customize as needed".dimmed()
    );
    println!(
        "{}",
        "# Usage: skald generate --config your-config.yml".dimmed()
    );
    println!();

    let config = SkaldConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{yaml_output}");

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    let config = SkaldConfig::default();
    let yaml_content = serde_yaml::to_string(&config)?;
    tokio::fs::write(&args.output, yaml_content).await?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Edit the configuration file to customize mutation settings");
    println!(
        "   2. Generate with: {}",
        format!("skald generate --config {}", args.output.display()).cyan()
    );

    Ok(())
}

/// Validate a skald configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    match SkaldConfig::from_yaml_file(&args.config) {
        Ok(config) => {
            println!(
                "{}",
                "✅ Configuration file is valid!".bright_green().bold()
            );
            println!();
            println!(
                "   model: {}   seed limits: {}/{}/{}   length: {}..={}",
                config.generator.model.cyan(),
                config.mutation.numeric_seed_limit,
                config.mutation.symbol_seed_limit,
                config.mutation.leet_seed_limit,
                config.mutation.min_word_length,
                config.mutation.max_word_length,
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Verify all required fields are present");
            println!("   • Ensure numeric values are in valid ranges");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'skald print-default-config' to see valid format".dimmed()
            );
            Err(anyhow::anyhow!("Configuration validation failed: {}", e))
        }
    }
}

/// Load configuration from an explicit path, or fall back to defaults.
pub async fn load_configuration(path: Option<&std::path::Path>) -> anyhow::Result<SkaldConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            Ok(SkaldConfig::from_yaml_file(path)?)
        }
        None => Ok(SkaldConfig::default()),
    }
}

fn resolve_output_path(args: &GenerateArgs, config: &SkaldConfig) -> PathBuf {
    if let Some(output) = &args.output {
        output.clone()
    } else if args.timestamp {
        PathBuf::from(timestamped_filename(chrono::Local::now()))
    } else {
        PathBuf::from(&config.output.default_file)
    }
}

fn read_seed_file(path: &std::path::Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read seed file {}: {}", path.display(), e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}
