//! Trip planner CLI entry point

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, warn};

use tripplanner::cli::{Cli, Command};
use tripplanner::config::Config;
use tripplanner::llm::create_client;
use tripplanner::planner::{Planner, SessionLog, Transcript, request_from_channel};
use tripplanner::prompts::PromptLoader;
use triplog::{ItineraryRecord, TripLog};
use triplog::export::{self, ExportFormat};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Log level priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    let log_file = fs::File::create(log_dir.join("tripplanner.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref())?;

    match cli.command {
        Command::Plan {
            city,
            interests,
            duration,
            budget,
            style,
            season,
            accessibility,
            output,
            format,
            no_history,
        } => {
            run_plan(
                &config,
                PlanArgs {
                    city,
                    interests,
                    duration,
                    budget,
                    style,
                    season,
                    accessibility,
                    output,
                    format,
                    no_history,
                },
            )
            .await
        }
        Command::History { limit } => run_history(&config, limit),
    }
}

struct PlanArgs {
    city: String,
    interests: String,
    duration: Option<tripplanner::domain::TripDuration>,
    budget: Option<tripplanner::domain::BudgetLevel>,
    style: Vec<tripplanner::domain::TravelStyle>,
    season: Option<tripplanner::domain::Season>,
    accessibility: bool,
    output: Option<PathBuf>,
    format: String,
    no_history: bool,
}

async fn run_plan(config: &Config, args: PlanArgs) -> Result<()> {
    // Required-input check happens before anything else; a missing field is
    // a warning, not a pipeline failure.
    if args.city.trim().is_empty() || args.interests.trim().is_empty() {
        println!(
            "{} Please fill in both city and interests to generate an itinerary",
            "⚠".yellow()
        );
        return Ok(());
    }

    config.validate()?;

    // Decode the combined input channel, then let explicit flags win.
    let (mut request, notices) = request_from_channel(args.city.clone(), &args.interests);
    for notice in &notices {
        println!("{} {}", "⚠".yellow(), notice);
    }
    if let Some(duration) = args.duration {
        request.duration = duration;
    }
    if let Some(budget) = args.budget {
        request.budget = budget;
    }
    if !args.style.is_empty() {
        request.travel_style = args.style.clone();
    }
    if let Some(season) = args.season {
        request.season = season;
    }
    request.accessibility = args.accessibility;

    let mut transcript = Transcript::new();
    transcript.record_destination(&request.city);
    transcript.record_interests(&args.interests);

    let mut session = SessionLog::new();

    println!("{} Creating your perfect itinerary...", "🔮".normal());

    // Fixed pacing pause, interface feel only
    if config.ui.pacing_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.ui.pacing_ms)).await;
    }

    let llm = create_client(&config.llm)?;
    let planner = Planner::new(llm, PromptLoader::new("."), &config.llm);

    let itinerary = match planner.generate(&request).await {
        Ok(itinerary) => itinerary,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = std::error::Error::source(cause);
            }
            std::process::exit(1);
        }
    };

    transcript.record_itinerary(&itinerary);

    println!("{} Your custom itinerary has been created!", "✓".green());
    println!();
    println!(
        "{}",
        format!("Your {} itinerary for {}", request.duration, request.city)
            .bold()
            .cyan()
    );
    println!(
        "{}",
        format!(
            "Based on: {} • Budget: {}",
            request.interests_joined(),
            request.budget
        )
        .dimmed()
    );
    println!();
    println!("{}", itinerary);
    println!();
    println!("{}", "Trip details".bold());
    println!("  Destination:  {}", request.city);
    println!("  Interests:    {}", request.interests_joined());
    println!("  Duration:     {}", request.duration);
    println!("  Budget:       {}", request.budget);
    println!("  Travel style: {}", request.travel_style_joined());
    println!("  Season:       {}", request.season);

    let record = ItineraryRecord::new(
        request.city.clone(),
        request.interests.clone(),
        request.duration.to_string(),
        request.budget.to_string(),
        request.travel_style_labels(),
        itinerary,
    );
    session.append(record.clone());
    debug!(session_entries = session.len(), "run_plan: session log updated");

    if config.history.enabled && !args.no_history {
        match TripLog::open(&config.history.path) {
            Ok(log) => {
                log.append(&record)?;
                println!();
                println!("{}", format!("Recorded in history ({})", record.id).dimmed());
            }
            Err(e) => {
                warn!(error = %e, "run_plan: could not open history, skipping record");
            }
        }
    }

    if let Some(path) = args.output {
        let format: ExportFormat = args.format.parse().map_err(|e: String| eyre::eyre!(e))?;
        let content = export::render(&record, format)?;
        fs::write(&path, content).context(format!("Failed to write export to {}", path.display()))?;
        println!(
            "{} Exported itinerary to {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
    }

    Ok(())
}

fn run_history(config: &Config, limit: Option<usize>) -> Result<()> {
    let log = TripLog::open(&config.history.path)?;
    let records = log.load()?;
    if records.is_empty() {
        println!("No itineraries recorded");
        return Ok(());
    }
    let skip = limit.map(|n| records.len().saturating_sub(n)).unwrap_or(0);
    for record in &records[skip..] {
        println!("{}  {}", record.id.yellow(), record.summary());
    }
    Ok(())
}
