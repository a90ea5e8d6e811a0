//! Job matcher: score job descriptions against a resume analysis

mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{JobMatcherError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use log::{error, info};
use matching::MatchEngine;
use output::formatter::ReportGenerator;
use output::report::{rank_records, MatchRecord};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Match {
            analysis,
            job,
            strategy,
            detailed,
            output,
            save,
        } => {
            info!("Starting job match");

            cli::validate_file_extension(&analysis, &["json"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Resume analysis: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Job description: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(JobMatcherError::InvalidInput)?;
            apply_strategy_override(&mut config, strategy)?;

            let mut input_manager = InputManager::new();
            let resume = input_manager.load_resume_analysis(&analysis)?;
            let job_text = input_manager.load_job_text(&job)?;

            let engine = MatchEngine::new(&config)?;
            let stats = engine.stats();
            info!(
                "Matching with vocabulary {} ({} skills, {:?} strategy)",
                stats.vocabulary_version, stats.vocabulary_skills, stats.strategy
            );

            let record = MatchRecord::new(job_id(&job), engine.match_job(&resume, &job_text));

            let generator =
                ReportGenerator::new(output_format, config.output.color_output, detailed);
            let rendered = generator.format_record(&record)?;
            println!("{}", rendered);

            if let Some(path) = save {
                generator.save_to_file(&rendered, &path)?;
                println!("💾 Report saved to: {}", path.display());
            }
        }

        Commands::Batch {
            analysis,
            jobs,
            strategy,
            min_score,
            output,
            save,
        } => {
            info!("Starting batch match over {} jobs", jobs.len());

            let output_format =
                cli::parse_output_format(&output).map_err(JobMatcherError::InvalidInput)?;
            apply_strategy_override(&mut config, strategy)?;

            let mut input_manager = InputManager::new();
            let resume = input_manager.load_resume_analysis(&analysis)?;
            let engine = MatchEngine::new(&config)?;

            let progress = ProgressBar::new(jobs.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("Invalid progress template")
                    .progress_chars("#>-"),
            );

            let mut records = Vec::new();
            for job in &jobs {
                progress.set_message(job_id(job));
                match input_manager.load_job_text(job) {
                    Ok(job_text) => {
                        records.push(MatchRecord::new(job_id(job), engine.match_job(&resume, &job_text)));
                    }
                    Err(e) => {
                        // One unreadable posting should not sink the batch.
                        log::warn!("Skipping {}: {}", job.display(), e);
                    }
                }
                progress.inc(1);
            }
            progress.finish_with_message("done");

            if let Some(min_score) = min_score {
                records.retain(|r| r.result.overall_score >= min_score);
            }
            rank_records(&mut records);

            let generator = ReportGenerator::new(output_format, config.output.color_output, false);
            let rendered = generator.format_ranking(&records)?;
            println!("{}", rendered);

            if let Some(path) = save {
                let full = serde_json::to_string_pretty(&records)?;
                generator.save_to_file(&full, &path)?;
                println!("💾 Match records saved to: {}", path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Matching strategy: {:?}", config.matching.strategy);
                println!("\nScoring weights:");
                println!("  Technical skills: {:.0}%", config.scoring.technical * 100.0);
                println!("  Soft skills: {:.0}%", config.scoring.soft_skills * 100.0);
                println!("  Experience: {:.0}%", config.scoring.experience * 100.0);
                println!("  Keywords: {:.0}%", config.scoring.keywords * 100.0);
                println!("  Must-have: {:.0}%", config.scoring.must_have * 100.0);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn apply_strategy_override(config: &mut Config, strategy: Option<String>) -> Result<()> {
    if let Some(strategy) = strategy {
        config.matching.strategy =
            cli::parse_strategy(&strategy).map_err(JobMatcherError::InvalidInput)?;
    }
    Ok(())
}

/// Identify a job by its file stem, falling back to the full path.
fn job_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_uses_file_stem() {
        assert_eq!(job_id(Path::new("jobs/backend-role.txt")), "backend-role");
    }
}
