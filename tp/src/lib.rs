//! TripPlanner - personalized travel itineraries from an LLM
//!
//! Collects trip preferences (destination, interests, duration, budget,
//! travel style, season, accessibility), renders them into a fixed prompt
//! template, and sends one completion request to a hosted text-generation
//! service. The returned markdown itinerary is displayed, recorded in an
//! append-only history, and offered as a JSON or plain-text export.
//!
//! # Modules
//!
//! - [`domain`] - trip request types and the combined-string parameter codec
//! - [`llm`] - LLM client trait and the Groq implementation
//! - [`prompts`] - itinerary prompt template loading and rendering
//! - [`planner`] - the generation pipeline and session context
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod planner;
pub mod prompts;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use domain::{BudgetLevel, MissingInput, Season, TravelStyle, TripDuration, TripRequest};
pub use llm::{CompletionRequest, CompletionResponse, GroqClient, LlmClient, LlmError, create_client};
pub use planner::{Planner, PlannerError, SessionLog, Transcript, request_from_channel};
pub use prompts::{ItineraryContext, PromptLoader};
