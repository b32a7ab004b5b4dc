//! Fixed-choice trip parameters
//!
//! Each enum's `Display` output is the canonical label shown to users and
//! substituted into prompts; `FromStr` accepts the label case-insensitively.

use serde::{Deserialize, Serialize};

/// Trip length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TripDuration {
    HalfDay,
    #[default]
    FullDay,
    TwoDays,
    ThreeDays,
    Week,
}

impl TripDuration {
    /// All durations, in increasing length
    pub const ALL: [TripDuration; 5] = [
        Self::HalfDay,
        Self::FullDay,
        Self::TwoDays,
        Self::ThreeDays,
        Self::Week,
    ];
}

impl std::fmt::Display for TripDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HalfDay => write!(f, "Half day"),
            Self::FullDay => write!(f, "Full day"),
            Self::TwoDays => write!(f, "2 days"),
            Self::ThreeDays => write!(f, "3 days"),
            Self::Week => write!(f, "Week"),
        }
    }
}

impl std::str::FromStr for TripDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "half day" => Ok(Self::HalfDay),
            "full day" => Ok(Self::FullDay),
            "2 days" => Ok(Self::TwoDays),
            "3 days" => Ok(Self::ThreeDays),
            "week" => Ok(Self::Week),
            _ => Err(format!("Unknown trip duration: {}", s)),
        }
    }
}

/// Budget level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetLevel {
    Budget,
    #[default]
    MidRange,
    Luxury,
    NoLimit,
}

impl BudgetLevel {
    /// All budget levels, cheapest first
    pub const ALL: [BudgetLevel; 4] = [Self::Budget, Self::MidRange, Self::Luxury, Self::NoLimit];
}

impl std::fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "Budget"),
            Self::MidRange => write!(f, "Mid-range"),
            Self::Luxury => write!(f, "Luxury"),
            Self::NoLimit => write!(f, "No limit"),
        }
    }
}

impl std::str::FromStr for BudgetLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "mid-range" => Ok(Self::MidRange),
            "luxury" => Ok(Self::Luxury),
            "no limit" => Ok(Self::NoLimit),
            _ => Err(format!("Unknown budget level: {}", s)),
        }
    }
}

/// Travel style tag - non-exclusive, a trip may carry several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    FamilyFriendly,
    Adventure,
    Cultural,
    Relaxation,
    Foodie,
    Shopping,
    Nature,
}

impl TravelStyle {
    /// All style tags
    pub const ALL: [TravelStyle; 7] = [
        Self::FamilyFriendly,
        Self::Adventure,
        Self::Cultural,
        Self::Relaxation,
        Self::Foodie,
        Self::Shopping,
        Self::Nature,
    ];
}

impl std::fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FamilyFriendly => write!(f, "Family-friendly"),
            Self::Adventure => write!(f, "Adventure"),
            Self::Cultural => write!(f, "Cultural"),
            Self::Relaxation => write!(f, "Relaxation"),
            Self::Foodie => write!(f, "Foodie"),
            Self::Shopping => write!(f, "Shopping"),
            Self::Nature => write!(f, "Nature"),
        }
    }
}

impl std::str::FromStr for TravelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "family-friendly" => Ok(Self::FamilyFriendly),
            "adventure" => Ok(Self::Adventure),
            "cultural" => Ok(Self::Cultural),
            "relaxation" => Ok(Self::Relaxation),
            "foodie" => Ok(Self::Foodie),
            "shopping" => Ok(Self::Shopping),
            "nature" => Ok(Self::Nature),
            _ => Err(format!("Unknown travel style: {}", s)),
        }
    }
}

/// Season of visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    #[default]
    Current,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Fall => write!(f, "Fall"),
            Self::Winter => write!(f, "Winter"),
            Self::Current => write!(f, "Current season"),
        }
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            "current season" | "current" => Ok(Self::Current),
            _ => Err(format!("Unknown season: {}", s)),
        }
    }
}
