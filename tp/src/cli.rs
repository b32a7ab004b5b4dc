//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{BudgetLevel, Season, TravelStyle, TripDuration};

/// Trip planner - personalized travel itineraries from an LLM
#[derive(Parser)]
#[command(
    name = "tp",
    about = "AI trip planner - create personalized travel itineraries",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a personalized itinerary
    Plan {
        /// Destination city
        #[arg(long)]
        city: String,

        /// Interests, comma-separated. Inline "Duration:", "Budget:" and
        /// "Style:" markers from the combined input channel are honored.
        #[arg(long)]
        interests: String,

        /// Trip duration (Half day, Full day, 2 days, 3 days, Week)
        #[arg(long)]
        duration: Option<TripDuration>,

        /// Budget level (Budget, Mid-range, Luxury, No limit)
        #[arg(long)]
        budget: Option<BudgetLevel>,

        /// Travel style; repeat for several (Family-friendly, Adventure,
        /// Cultural, Relaxation, Foodie, Shopping, Nature)
        #[arg(long = "style")]
        style: Vec<TravelStyle>,

        /// Season of visit (Spring, Summer, Fall, Winter, Current season)
        #[arg(long)]
        season: Option<Season>,

        /// Ask for accessibility-friendly recommendations
        #[arg(long)]
        accessibility: bool,

        /// Write the itinerary to this file after generating
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format for --output (json or text)
        #[arg(long, default_value = "text")]
        format: String,

        /// Skip recording the itinerary in the history file
        #[arg(long)]
        no_history: bool,
    },

    /// List recorded itineraries
    History {
        /// Show at most this many entries, newest last
        #[arg(long)]
        limit: Option<usize>,
    },
}
