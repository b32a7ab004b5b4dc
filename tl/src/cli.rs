//! CLI argument parsing for triplog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, about = "Itinerary history store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recorded itineraries
    List {
        /// Show at most this many entries, newest last
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print a recorded itinerary
    Show {
        /// Record ID (or unique prefix)
        #[arg(required = true)]
        id: String,
    },

    /// Export a recorded itinerary to a file
    Export {
        /// Record ID (or unique prefix); defaults to the latest record
        id: Option<String>,

        /// Export format (json or text)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output path (defaults to <city>_itinerary.<ext> in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
