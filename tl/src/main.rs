use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;

use triplog::TripLog;
use triplog::cli::{Cli, Command};
use triplog::config::Config;
use triplog::export::{self, ExportFormat};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("triplog starting");

    match cli.command {
        Command::List { limit } => {
            let log = TripLog::open(&config.history_path)?;
            let records = log.load()?;
            if records.is_empty() {
                println!("No itineraries recorded");
                return Ok(());
            }
            let skip = limit.map(|n| records.len().saturating_sub(n)).unwrap_or(0);
            for record in &records[skip..] {
                println!("{}  {}", record.id.yellow(), record.summary());
            }
        }
        Command::Show { id } => {
            let log = TripLog::open(&config.history_path)?;
            let record = log
                .get(&id)?
                .ok_or_else(|| eyre!("No itinerary found for ID '{}'", id))?;
            println!("{}", export::to_text(&record));
        }
        Command::Export { id, format, output } => {
            let log = TripLog::open(&config.history_path)?;
            let record = match id {
                Some(id) => log
                    .get(&id)?
                    .ok_or_else(|| eyre!("No itinerary found for ID '{}'", id))?,
                None => log
                    .latest()?
                    .ok_or_else(|| eyre!("No itineraries recorded yet"))?,
            };

            let format: ExportFormat = format
                .parse()
                .map_err(|e: String| eyre!(e))?;
            let path = output.unwrap_or_else(|| export::suggested_filename(&record, format).into());
            let content = export::render(&record, format)?;
            std::fs::write(&path, content)
                .context(format!("Failed to write export to {}", path.display()))?;
            println!("{} Exported itinerary to {}", "✓".green(), path.display().to_string().cyan());
        }
    }

    Ok(())
}
