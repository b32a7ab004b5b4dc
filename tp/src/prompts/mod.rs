//! Prompt template system
//!
//! Loads and renders `.pmt` (prompt template) files for the itinerary
//! generation call.
//!
//! Template loading chain:
//! 1. `.tripplanner/prompts/{name}.pmt` (user override)
//! 2. `prompts/{name}.pmt` (repo default)
//! 3. Embedded fallback in code
//!
//! Templates use Handlebars syntax for variable substitution.

pub mod embedded;
mod loader;

pub use loader::{ItineraryContext, PromptLoader};

/// Fixed human-turn instruction sent with every generation request
pub const ITINERARY_REQUEST: &str = "Create a personalized itinerary for my trip";
