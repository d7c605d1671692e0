//! Configuration management for the travel planner.
//!
//! Settings are layered:
//! 1. Default values
//! 2. Config file (`~/.voyagent/config.toml`)
//! 3. Command-line flags and environment variables

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use voyagent::llms::OllamaConfig;

use crate::error::Result;
use crate::trip::TripRequest;

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// Invalid value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Model server and sampling settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// The trip planned when no flags override it.
    #[serde(default)]
    pub trip: TripConfig,
}

/// Model server and sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Ollama base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name.
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long Ollama keeps the model loaded, e.g. `5m`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
}

fn default_base_url() -> String {
    OllamaConfig::DEFAULT_BASE_URL.to_owned()
}

fn default_model_name() -> String {
    OllamaConfig::DEFAULT_MODEL.to_owned()
}

const fn default_temperature() -> f64 {
    0.3
}

const fn default_timeout_secs() -> u64 {
    OllamaConfig::DEFAULT_TIMEOUT_SECS
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            name: default_model_name(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            keep_alive: None,
        }
    }
}

impl ModelConfig {
    /// Sampling temperature at the precision the chat request carries.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn sampling_temperature(&self) -> f32 {
        self.temperature as f32
    }

    /// Builds the Ollama client configuration.
    #[must_use]
    pub fn to_ollama_config(&self) -> OllamaConfig {
        let config = OllamaConfig::with_model(&self.name)
            .base_url(&self.base_url)
            .timeout(self.timeout_secs);
        match &self.keep_alive {
            Some(keep_alive) => config.keep_alive(keep_alive),
            None => config,
        }
    }
}

/// The trip to plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TripConfig {
    /// Departure city.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Destination city.
    #[serde(default = "default_destination")]
    pub destination: String,

    /// Budget in dollars.
    #[serde(default = "default_budget")]
    pub budget: f64,

    /// Length of stay in nights.
    #[serde(default = "default_nights")]
    pub nights: i64,
}

fn default_origin() -> String {
    "New York".to_owned()
}

fn default_destination() -> String {
    "Tokyo".to_owned()
}

const fn default_budget() -> f64 {
    3500.0
}

const fn default_nights() -> i64 {
    3
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            destination: default_destination(),
            budget: default_budget(),
            nights: default_nights(),
        }
    }
}

impl TripConfig {
    /// Validates the trip.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidTrip`](crate::PlannerError::InvalidTrip)
    /// when the trip fails validation.
    pub fn to_request(&self) -> Result<TripRequest> {
        TripRequest::new(self.budget, &self.origin, &self.destination, self.nights)
    }
}

impl PlannerConfig {
    /// Checks the model settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty model name, a base
    /// URL that is not HTTP(S), a temperature outside `0.0..=2.0`, or a zero
    /// timeout.
    pub fn validate(&self) -> ConfigResult<()> {
        let model = &self.model;
        if model.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("model name is empty".into()));
        }
        if !(model.base_url.starts_with("http://") || model.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(format!(
                "base_url must start with http:// or https://, got {:?}",
                model.base_url
            )));
        }
        if !(0.0..=2.0).contains(&model.temperature) {
            return Err(ConfigError::InvalidValue(format!(
                "temperature must be between 0 and 2, got {}",
                model.temperature
            )));
        }
        if model.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Get the default config directory path.
#[must_use]
pub fn default_config_dir() -> PathBuf {
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".voyagent")
}

/// Get the default config file path.
#[must_use]
pub fn config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Load configuration from the default path.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub async fn load_config() -> ConfigResult<PlannerConfig> {
    load_config_from(&config_path()).await
}

/// Load configuration from a specific path. A missing file yields defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub async fn load_config_from(path: &Path) -> ConfigResult<PlannerConfig> {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Ok(PlannerConfig::default());
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: PlannerConfig = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Save configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub async fn save_config_to(config: &PlannerConfig, path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let content = toml::to_string_pretty(config)?;
    tokio::fs::write(path, content).await?;
    info!(path = %path.display(), "saved config file");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        assert!(default_config_dir().ends_with(".voyagent"));
        assert!(config_path().ends_with("config.toml"));
    }

    mod parse {
        use super::*;

        #[test]
        fn empty_file_is_defaults() {
            let config: PlannerConfig = toml::from_str("").unwrap();
            assert_eq!(config, PlannerConfig::default());
            assert_eq!(config.model.name, "mistral");
            assert_eq!(config.model.base_url, "http://localhost:11434");
            assert_eq!(config.trip.nights, 3);
        }

        #[test]
        fn partial_sections_keep_other_defaults() {
            let config: PlannerConfig = toml::from_str(
                r#"
                [model]
                name = "llama3.2"
                keep_alive = "5m"

                [trip]
                origin = "London"
                destination = "Paris"
                "#,
            )
            .unwrap();

            assert_eq!(config.model.name, "llama3.2");
            assert_eq!(config.model.keep_alive.as_deref(), Some("5m"));
            assert!((config.model.temperature - 0.3).abs() < f64::EPSILON);
            assert_eq!(config.trip.destination, "Paris");
            assert!((config.trip.budget - 3500.0).abs() < f64::EPSILON);
        }

        #[test]
        fn unknown_keys_are_rejected() {
            assert!(toml::from_str::<PlannerConfig>("[model]\napi_key = \"x\"").is_err());
            assert!(toml::from_str::<PlannerConfig>("[agents]\n").is_err());
        }

        #[test]
        fn defaults_round_trip_through_toml() {
            let text = toml::to_string_pretty(&PlannerConfig::default()).unwrap();
            assert!(text.contains("[model]"));
            assert!(!text.contains("keep_alive"));
            let parsed: PlannerConfig = toml::from_str(&text).unwrap();
            assert_eq!(parsed, PlannerConfig::default());
        }
    }

    mod validate {
        use super::*;

        #[test]
        fn defaults_are_valid() {
            assert!(PlannerConfig::default().validate().is_ok());
        }

        #[test]
        fn rejects_bad_model_settings() {
            let mut config = PlannerConfig::default();
            config.model.temperature = 3.5;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidValue(msg)) if msg.contains("temperature")
            ));

            let mut config = PlannerConfig::default();
            config.model.base_url = "localhost:11434".into();
            assert!(config.validate().is_err());

            let mut config = PlannerConfig::default();
            config.model.name = "  ".into();
            assert!(config.validate().is_err());

            let mut config = PlannerConfig::default();
            config.model.timeout_secs = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn trip_validation_uses_trip_rules() {
            let mut config = PlannerConfig::default();
            config.trip.nights = 0;
            let err = config.trip.to_request().unwrap_err();
            assert!(err.to_string().contains("Number of nights must be positive"));
        }
    }

    #[test]
    fn ollama_config_carries_model_settings() {
        let mut model = ModelConfig::default();
        model.base_url = "http://gpu-box:11434".into();
        model.keep_alive = Some("10m".into());

        let ollama = model.to_ollama_config();
        assert_eq!(ollama.base_url, "http://gpu-box:11434");
        assert_eq!(ollama.model, "mistral");
        assert_eq!(ollama.timeout_secs, Some(300));
        assert_eq!(ollama.keep_alive.as_deref(), Some("10m"));
    }

    mod files {
        use super::*;

        fn scratch_path(name: &str) -> PathBuf {
            std::env::temp_dir()
                .join(format!("voyagent-config-{}-{name}", std::process::id()))
                .join("config.toml")
        }

        #[tokio::test]
        async fn missing_file_gives_defaults() {
            let config = load_config_from(&scratch_path("missing")).await.unwrap();
            assert_eq!(config, PlannerConfig::default());
        }

        #[tokio::test]
        async fn save_then_load() {
            let path = scratch_path("roundtrip");
            let mut config = PlannerConfig::default();
            config.trip.destination = "Paris".into();
            config.model.keep_alive = Some("5m".into());

            save_config_to(&config, &path).await.unwrap();
            let loaded = load_config_from(&path).await.unwrap();
            assert_eq!(loaded, config);

            if let Some(dir) = path.parent() {
                let _ = tokio::fs::remove_dir_all(dir).await;
            }
        }

        #[tokio::test]
        async fn malformed_file_is_a_parse_error() {
            let path = scratch_path("malformed");
            save_config_to(&PlannerConfig::default(), &path).await.unwrap();
            tokio::fs::write(&path, "[model\nname = ").await.unwrap();

            let err = load_config_from(&path).await.unwrap_err();
            assert!(matches!(err, ConfigError::TomlParse(_)));

            if let Some(dir) = path.parent() {
                let _ = tokio::fs::remove_dir_all(dir).await;
            }
        }
    }
}
