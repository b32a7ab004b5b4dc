//! Itinerary generation pipeline
//!
//! Wires the pieces together: a [`TripRequest`] is rendered into the
//! itinerary prompt and sent through the [`LlmClient`] in exactly one
//! attempt. Every failure inside the pipeline is normalized into a
//! [`PlannerError`] naming the stage that failed; nothing is retried or
//! recovered locally.

mod session;

pub use session::{SessionLog, Speaker, Transcript, TranscriptTurn};

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::LlmConfig;
use crate::domain::{TripRequest, params};
use crate::llm::{CompletionRequest, LlmClient, LlmError, Message};
use crate::prompts::{ITINERARY_REQUEST, ItineraryContext, PromptLoader};

/// A pipeline stage failure
///
/// One generic shape for every boundary: a human-readable stage label plus
/// the underlying cause. The caller aborts the submission and reports it;
/// previously stored itineraries are never affected.
#[derive(Debug, Error)]
#[error("failed to {stage}")]
pub struct PlannerError {
    stage: &'static str,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl PlannerError {
    fn new(stage: &'static str, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }

    /// The stage label, e.g. `"create itinerary"`
    pub fn stage(&self) -> &'static str {
        self.stage
    }
}

/// Build a trip request from the combined-string input channel
///
/// Decodes any inline `Duration:` / `Budget:` / `Style:` markers carried in
/// the interests text and applies the recognized values over the request
/// defaults. Returns the request together with notices for any parameter
/// text that was not recognized; decoding itself never fails.
pub fn request_from_channel(city: impl Into<String>, interests: &str) -> (TripRequest, Vec<String>) {
    let decoded = params::decode(interests);
    let (resolved, notices) = decoded.resolve();

    let mut request = TripRequest::new(city, decoded.interests);
    if let Some(duration) = resolved.duration {
        request.duration = duration;
    }
    if let Some(budget) = resolved.budget {
        request.budget = budget;
    }
    if let Some(travel_style) = resolved.travel_style {
        request.travel_style = travel_style;
    }

    (request, notices)
}

/// The itinerary generation pipeline
pub struct Planner {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    max_tokens: u32,
    temperature: f32,
}

impl Planner {
    /// Create a planner over the given client and prompt loader
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader, config: &LlmConfig) -> Self {
        debug!(model = %config.model, "Planner::new: called");
        Self {
            llm,
            prompts,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Generate one itinerary for the request
    ///
    /// Callers validate the request at the input boundary first; a request
    /// that still fails the invariant here is normalized into the generic
    /// stage error like any other pipeline failure. Exactly one generation
    /// attempt is made.
    pub async fn generate(&self, request: &TripRequest) -> Result<String, PlannerError> {
        debug!(city = %request.city, "Planner::generate: called");
        request
            .validate()
            .map_err(|e| PlannerError::new("create itinerary", e))?;

        info!(
            "Generating itinerary for {} with interests: {}",
            request.city,
            request.interests_joined()
        );
        debug!(
            duration = %request.duration,
            budget = %request.budget,
            style = %request.travel_style_joined(),
            season = %request.season,
            accessibility = request.accessibility,
            "Planner::generate: trip parameters"
        );

        let context = ItineraryContext::from_request(request);
        let system_prompt = self
            .prompts
            .itinerary_prompt(&context)
            .map_err(|e| PlannerError::new("create itinerary", e))?;

        let completion = self
            .llm
            .complete(CompletionRequest {
                system_prompt,
                messages: vec![Message::user(ITINERARY_REQUEST)],
                max_tokens: self.max_tokens,
                temperature: self.temperature,
            })
            .await
            .map_err(|e| PlannerError::new("create itinerary", e))?;

        debug!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "Planner::generate: completion received"
        );

        let itinerary = completion
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                PlannerError::new(
                    "create itinerary",
                    LlmError::InvalidResponse("Completion contained no text".to_string()),
                )
            })?;

        info!("Itinerary generated successfully");
        Ok(itinerary)
    }
}
