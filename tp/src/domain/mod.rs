//! Domain types for trip planning
//!
//! A trip is described by a [`TripRequest`]: destination city, free-text
//! interests, and a set of fixed-choice parameters ([`TripDuration`],
//! [`BudgetLevel`], [`TravelStyle`], [`Season`]). The [`params`] module
//! carries the legacy combined-string parameter codec.

mod options;
pub mod params;
mod request;

pub use options::{BudgetLevel, Season, TravelStyle, TripDuration};
pub use request::{MissingInput, TripRequest};
