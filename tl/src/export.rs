//! Export documents for recorded itineraries
//!
//! Two formats are offered: a JSON document with the trip details alongside
//! the itinerary text, and a plain-text document wrapping the itinerary in a
//! fixed header and footer.

use eyre::{Context, Result};
use serde::Serialize;

use crate::record::ItineraryRecord;

/// Export format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// JSON export shape - exactly these fields, in this order
#[derive(Serialize)]
struct ExportDoc<'a> {
    destination: &'a str,
    interests: &'a [String],
    duration: &'a str,
    budget: &'a str,
    travel_style: &'a [String],
    itinerary: &'a str,
    created_at: String,
}

/// Render a record as a pretty-printed JSON document
pub fn to_json(record: &ItineraryRecord) -> Result<String> {
    let doc = ExportDoc {
        destination: &record.destination,
        interests: &record.interests,
        duration: &record.duration,
        budget: &record.budget,
        travel_style: &record.travel_style,
        itinerary: &record.itinerary,
        created_at: record.created_at_display(),
    };
    serde_json::to_string_pretty(&doc).context("Failed to serialize export document")
}

/// Render a record as a plain-text document with a fixed header and footer
pub fn to_text(record: &ItineraryRecord) -> String {
    format!(
        "Trip Planner - Itinerary for {}\n\n{}\n\nGenerated on {}",
        record.destination,
        record.itinerary,
        record.created_at_display()
    )
}

/// Render a record in the requested format
pub fn render(record: &ItineraryRecord, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(record),
        ExportFormat::Text => Ok(to_text(record)),
    }
}

/// Suggested download filename, e.g. `Paris_itinerary.json`
pub fn suggested_filename(record: &ItineraryRecord, format: ExportFormat) -> String {
    let city: String = record
        .destination
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_itinerary.{}", city, format.extension())
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
            "# Day 1\n- Louvre",
        )
    }

    #[test]
    fn test_json_export_carries_documented_fields() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();

        for field in [
            "destination",
            "interests",
            "duration",
            "budget",
            "travel_style",
            "itinerary",
            "created_at",
        ] {
            assert!(obj.contains_key(field), "missing field {}", field);
        }
        // Nothing beyond the documented shape (no internal record ID)
        assert_eq!(obj.len(), 7);
        assert_eq!(value["destination"], "Paris");
        assert_eq!(value["travel_style"][1], "Foodie");
    }

    #[test]
    fn test_text_export_has_header_and_footer() {
        let text = to_text(&sample());
        assert!(text.starts_with("Trip Planner - Itinerary for Paris"));
        assert!(text.contains("# Day 1"));
        assert!(text.contains("\n\nGenerated on "));
    }

    #[test]
    fn test_suggested_filename_sanitizes_destination() {
        let mut record = sample();
        record.destination = "New York".to_string();
        assert_eq!(
            suggested_filename(&record, ExportFormat::Json),
            "New_York_itinerary.json"
        );
        assert_eq!(
            suggested_filename(&record, ExportFormat::Text),
            "New_York_itinerary.txt"
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("TEXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
