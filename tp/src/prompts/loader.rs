//! Prompt loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;
use crate::domain::TripRequest;

/// Accessibility phrase substituted when accommodations are requested
pub const ACCESSIBILITY_NEEDED: &str = "Consider accessibility needs";

/// Accessibility phrase substituted otherwise
pub const ACCESSIBILITY_NOT_NEEDED: &str = "No specific accessibility needs";

/// Context for rendering the itinerary template
///
/// All fields are pre-rendered strings; the template itself contains no
/// conditional logic beyond plain substitution.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryContext {
    /// Destination city
    pub city: String,
    /// Comma-joined interests
    pub interests: String,
    /// Duration label
    pub duration: String,
    /// Budget label
    pub budget: String,
    /// Comma-joined travel style labels
    pub travel_style: String,
    /// Season label
    pub season: String,
    /// Pre-phrased accessibility line
    pub accessibility: String,
}

impl ItineraryContext {
    /// Build the template context from a trip request
    pub fn from_request(request: &TripRequest) -> Self {
        debug!(city = %request.city, "ItineraryContext::from_request: called");
        let accessibility = if request.accessibility {
            ACCESSIBILITY_NEEDED
        } else {
            ACCESSIBILITY_NOT_NEEDED
        };

        Self {
            city: request.city.clone(),
            interests: request.interests_joined(),
            duration: request.duration.to_string(),
            budget: request.budget.to_string(),
            travel_style: request.travel_style_joined(),
            season: request.season.to_string(),
            accessibility: accessibility.to_string(),
        }
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (e.g., `.tripplanner/prompts/`)
    user_dir: Option<PathBuf>,
    /// Repo default directory (e.g., `prompts/`)
    repo_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader rooted at the given directory
    ///
    /// Looks for `.tripplanner/prompts/` and `prompts/` under the root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        debug!(?root, "PromptLoader::new: called");
        let user_dir = root.join(".tripplanner/prompts");
        let repo_dir = root.join("prompts");

        let mut hbs = Handlebars::new();
        // Prompts are prose, not markup
        hbs.register_escape_fn(handlebars::no_escape);

        Self {
            hbs,
            user_dir: user_dir.exists().then_some(user_dir),
            repo_dir: repo_dir.exists().then_some(repo_dir),
        }
    }

    /// Create a loader that only uses embedded prompts
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        Self {
            hbs,
            user_dir: None,
            repo_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `.tripplanner/prompts/{name}.pmt`
    /// 2. Repo default: `prompts/{name}.pmt`
    /// 3. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found in user override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            }
        }

        if let Some(ref repo_dir) = self.repo_dir {
            let path = repo_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found in repo");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read repo prompt {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "PromptLoader::load_template: found in embedded");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render the itinerary system prompt for a trip request
    pub fn itinerary_prompt(&self, context: &ItineraryContext) -> Result<String> {
        debug!(city = %context.city, "PromptLoader::itinerary_prompt: called");
        let template = self.load_template("itinerary")?;
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render itinerary template: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetLevel, TravelStyle, TripDuration};
    use tempfile::TempDir;

    fn paris_request() -> TripRequest {
        let mut request = TripRequest::new("Paris", vec!["art".to_string(), "food".to_string()]);
        request.duration = TripDuration::TwoDays;
        request.budget = BudgetLevel::Luxury;
        request.travel_style = vec![TravelStyle::Cultural, TravelStyle::Foodie];
        request
    }

    #[test]
    fn test_rendered_prompt_contains_request_fields() {
        let loader = PromptLoader::embedded_only();
        let context = ItineraryContext::from_request(&paris_request());
        let prompt = loader.itinerary_prompt(&context).unwrap();

        assert!(prompt.contains("Paris"));
        assert!(prompt.contains("2 days"));
        assert!(prompt.contains("Luxury"));
        assert!(prompt.contains("Cultural, Foodie"));
        assert!(prompt.contains("art, food"));
        assert!(prompt.contains("Current season"));
    }

    #[test]
    fn test_accessibility_phrases() {
        let loader = PromptLoader::embedded_only();

        let mut request = paris_request();
        request.accessibility = true;
        let prompt = loader
            .itinerary_prompt(&ItineraryContext::from_request(&request))
            .unwrap();
        assert!(prompt.contains("Consider accessibility needs"));

        request.accessibility = false;
        let prompt = loader
            .itinerary_prompt(&ItineraryContext::from_request(&request))
            .unwrap();
        assert!(prompt.contains("No specific accessibility needs"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let loader = PromptLoader::embedded_only();
        let context = ItineraryContext::from_request(&paris_request());
        let a = loader.itinerary_prompt(&context).unwrap();
        let b = loader.itinerary_prompt(&context).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_html_escaping_in_substitutions() {
        let loader = PromptLoader::embedded_only();
        let mut request = paris_request();
        request.city = "Xi'an".to_string();
        let prompt = loader
            .itinerary_prompt(&ItineraryContext::from_request(&request))
            .unwrap();
        assert!(prompt.contains("Xi'an"));
        assert!(!prompt.contains("&#x27;"));
    }

    #[test]
    fn test_user_override_wins_over_embedded() {
        let dir = TempDir::new().unwrap();
        let override_dir = dir.path().join(".tripplanner/prompts");
        std::fs::create_dir_all(&override_dir).unwrap();
        std::fs::write(override_dir.join("itinerary.pmt"), "Custom plan for {{city}}").unwrap();

        let loader = PromptLoader::new(dir.path());
        let context = ItineraryContext::from_request(&paris_request());
        let prompt = loader.itinerary_prompt(&context).unwrap();
        assert_eq!(prompt, "Custom plan for Paris");
    }

    #[test]
    fn test_embedded_fallback_when_no_directories() {
        let dir = TempDir::new().unwrap();
        let loader = PromptLoader::new(dir.path());
        let context = ItineraryContext::from_request(&paris_request());
        assert!(loader.itinerary_prompt(&context).is_ok());
    }
}
