//! TripLog - append-only itinerary history store
//!
//! Records generated travel itineraries and offers them back as export
//! documents (JSON or plain text). Storage is a single JSONL file: one
//! record per line, append-only, never rewritten.
//!
//! # Architecture
//!
//! ```text
//! <data dir>/triplog/
//! └── history.jsonl     # one ItineraryRecord per line
//! ```
//!
//! # Example
//!
//! ```ignore
//! use triplog::{ItineraryRecord, TripLog};
//!
//! let log = TripLog::open(".triplog/history.jsonl")?;
//! log.append(&record)?;
//! let all = log.load()?;
//! let json = triplog::export::to_json(&all[0])?;
//! ```

pub mod cli;
pub mod config;
pub mod export;
mod record;
mod store;

pub use record::ItineraryRecord;
pub use store::TripLog;

/// Timestamp display format used in exports and listings
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";
