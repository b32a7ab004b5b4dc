//! Itinerary record type

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CREATED_AT_FORMAT;

/// One generated itinerary, as recorded in the history log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryRecord {
    /// Unique record ID
    pub id: String,

    /// Destination city
    pub destination: String,

    /// Traveler interests
    pub interests: Vec<String>,

    /// Trip duration label (e.g., "Full day", "2 days")
    pub duration: String,

    /// Budget level label (e.g., "Mid-range")
    pub budget: String,

    /// Travel style labels (e.g., ["Cultural", "Foodie"])
    pub travel_style: Vec<String>,

    /// The generated itinerary text (markdown, stored verbatim)
    pub itinerary: String,

    /// When the itinerary was generated
    pub created_at: DateTime<Local>,
}

impl ItineraryRecord {
    /// Create a new record stamped with the current local time
    pub fn new(
        destination: impl Into<String>,
        interests: Vec<String>,
        duration: impl Into<String>,
        budget: impl Into<String>,
        travel_style: Vec<String>,
        itinerary: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            destination: destination.into(),
            interests,
            duration: duration.into(),
            budget: budget.into(),
            travel_style,
            itinerary: itinerary.into(),
            created_at: Local::now(),
        }
    }

    /// Creation timestamp formatted for display and exports
    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }

    /// One-line summary for listings
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({}, {})",
            self.created_at_display(),
            self.destination,
            self.duration,
            self.budget
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ItineraryRecord {
        ItineraryRecord::new(
            "Paris",
            vec!["art".to_string(), "food".to_string()],
            "2 days",
            "Luxury",
            vec!["Cultural".to_string(), "Foodie".to_string()],
            "# Day 1\nLouvre in the morning.",
        )
    }

    #[test]
    fn test_record_ids_are_unique() {
        let a = sample();
        let b = sample();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_created_at_display_format() {
        let record = sample();
        let display = record.created_at_display();
        // "YYYY-MM-DD HH:MM"
        assert_eq!(display.len(), 16);
        assert_eq!(&display[4..5], "-");
        assert_eq!(&display[13..14], ":");
    }

    #[test]
    fn test_summary_contains_destination_and_duration() {
        let record = sample();
        let summary = record.summary();
        assert!(summary.contains("Paris"));
        assert!(summary.contains("2 days"));
        assert!(summary.contains("Luxury"));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: ItineraryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.destination, "Paris");
        assert_eq!(back.interests, vec!["art", "food"]);
        assert_eq!(back.itinerary, record.itinerary);
    }
}
