//! Core TripLog implementation

use eyre::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::record::ItineraryRecord;

/// Append-only itinerary history backed by a JSONL file
///
/// Every record is one JSON line. Appends never rewrite existing lines, so
/// a failed generation can never corrupt previously stored itineraries.
pub struct TripLog {
    /// Path to the history file
    path: PathBuf,
}

impl TripLog {
    /// Open a trip log at the given file path, creating parent directories
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "TripLog::open: called");

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create history directory {}", parent.display()))?;
        }

        Ok(Self { path })
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the history
    pub fn append(&self, record: &ItineraryRecord) -> Result<()> {
        debug!(id = %record.id, destination = %record.destination, "TripLog::append: called");
        let line = serde_json::to_string(record).context("Failed to serialize itinerary record")?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .context(format!("Failed to open history file {}", self.path.display()))?;

        writeln!(file, "{}", line).context("Failed to write itinerary record")?;
        Ok(())
    }

    /// Load all records, oldest first
    ///
    /// Lines that fail to parse are skipped with a warning so one corrupt
    /// entry cannot make the whole history unreadable.
    pub fn load(&self) -> Result<Vec<ItineraryRecord>> {
        debug!(path = ?self.path, "TripLog::load: called");
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)
            .context(format!("Failed to open history file {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read history file")?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ItineraryRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(lineno = lineno + 1, error = %e, "Skipping unreadable history line");
                }
            }
        }

        debug!(count = records.len(), "TripLog::load: loaded records");
        Ok(records)
    }

    /// Look up a record by ID or unique ID prefix
    pub fn get(&self, id: &str) -> Result<Option<ItineraryRecord>> {
        debug!(%id, "TripLog::get: called");
        let records = self.load()?;

        if let Some(exact) = records.iter().find(|r| r.id == id) {
            return Ok(Some(exact.clone()));
        }

        let mut matches = records.iter().filter(|r| r.id.starts_with(id));
        let first = matches.next().cloned();
        if matches.next().is_some() {
            return Err(eyre::eyre!("Record ID prefix '{}' is ambiguous", id));
        }
        Ok(first)
    }

    /// The most recently appended record, if any
    pub fn latest(&self) -> Result<Option<ItineraryRecord>> {
        Ok(self.load()?.into_iter().next_back())
    }
}
