//! Trip planner configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main trip planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Itinerary history configuration
    pub history: HistoryConfig,

    /// Interface pacing configuration
    pub ui: UiConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks that required environment variables are set. Call this early
    /// in startup to fail fast with clear error messages.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .tripplanner.yml
        let local_config = PathBuf::from(".tripplanner.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/tripplanner/tripplanner.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tripplanner").join("tripplanner.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "groq" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Sampling temperature (kept low so itineraries stay on-template)
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env)
            .context(format!("API key environment variable {} is not set", self.api_key_env))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            base_url: "https://api.groq.com/openai".to_string(),
            max_tokens: 4096,
            temperature: 0.3,
            timeout_ms: 120_000,
        }
    }
}

/// Itinerary history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Whether generated itineraries are recorded
    pub enabled: bool,

    /// Path to the history file (shared with the `tl` tool)
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: triplog::config::default_history_path(),
        }
    }
}

/// Interface pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Fixed pause before the generation call, in milliseconds
    ///
    /// Interface feel only; not a correctness control.
    #[serde(rename = "pacing-ms")]
    pub pacing_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { pacing_ms: 1000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.llm.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.llm.base_url, "https://api.groq.com/openai");
        assert!((config.llm.temperature - 0.3).abs() < f32::EPSILON);
        assert!(config.history.enabled);
        assert_eq!(config.ui.pacing_ms, 1000);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "llm:\n  model: llama-3.1-8b-instant\nui:\n  pacing-ms: 0\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        // Untouched fields keep their defaults
        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.ui.pacing_ms, 0);
        assert!(config.history.enabled);
    }

    #[test]
    #[serial]
    fn test_validate_requires_api_key_env() {
        let mut config = Config::default();
        config.llm.api_key_env = "TRIPPLANNER_TEST_KEY".to_string();

        unsafe { std::env::remove_var("TRIPPLANNER_TEST_KEY") };
        assert!(config.validate().is_err());

        unsafe { std::env::set_var("TRIPPLANNER_TEST_KEY", "gsk-test") };
        assert!(config.validate().is_ok());
        assert_eq!(config.llm.api_key().unwrap(), "gsk-test");
        unsafe { std::env::remove_var("TRIPPLANNER_TEST_KEY") };
    }
}
