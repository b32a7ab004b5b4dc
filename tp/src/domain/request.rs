//! Trip request type

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::options::{BudgetLevel, Season, TravelStyle, TripDuration};

/// Required input missing from a trip request
///
/// Raised by [`TripRequest::validate`] before the pipeline runs; callers
/// surface it as a warning, not a pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingInput {
    #[error("destination city is required")]
    City,

    #[error("at least one interest is required")]
    Interests,
}

/// Everything needed to generate one itinerary
///
/// This is the structured value passed directly through the pipeline; the
/// combined-string form in [`super::params`] exists only for compatibility
/// with the single-text-channel input surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination city
    pub city: String,

    /// Free-text interest tags, in the order the traveler gave them
    pub interests: Vec<String>,

    /// Trip length
    #[serde(default)]
    pub duration: TripDuration,

    /// Budget level
    #[serde(default)]
    pub budget: BudgetLevel,

    /// Travel style tags
    #[serde(default = "default_travel_style")]
    pub travel_style: Vec<TravelStyle>,

    /// Season of visit
    #[serde(default)]
    pub season: Season,

    /// Whether accessibility accommodations are needed
    #[serde(default)]
    pub accessibility: bool,
}

fn default_travel_style() -> Vec<TravelStyle> {
    vec![TravelStyle::Cultural]
}

impl TripRequest {
    /// Create a request for a city with all other fields at their defaults
    pub fn new(city: impl Into<String>, interests: Vec<String>) -> Self {
        Self {
            city: city.into(),
            interests,
            duration: TripDuration::default(),
            budget: BudgetLevel::default(),
            travel_style: default_travel_style(),
            season: Season::default(),
            accessibility: false,
        }
    }

    /// Check the pre-generation invariant: city and at least one interest
    pub fn validate(&self) -> Result<(), MissingInput> {
        if self.city.trim().is_empty() {
            return Err(MissingInput::City);
        }
        if !self.interests.iter().any(|i| !i.trim().is_empty()) {
            return Err(MissingInput::Interests);
        }
        Ok(())
    }

    /// Interests joined for display and prompt substitution
    pub fn interests_joined(&self) -> String {
        self.interests.join(", ")
    }

    /// Travel styles joined for display and prompt substitution
    pub fn travel_style_joined(&self) -> String {
        self.travel_style
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Travel styles as plain labels (for record storage)
    pub fn travel_style_labels(&self) -> Vec<String> {
        self.travel_style.iter().map(|s| s.to_string()).collect()
    }
}
