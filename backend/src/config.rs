//! Configuration management for the Farm Advisory Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Generative AI configuration
    pub gemini: GeminiConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// External ML prediction service configuration
    pub ml: MlConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory of static frontend files
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key (never logged)
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// API base URL (override for testing)
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// API key (never logged); requests fail with a configuration error
    /// when this is left empty
    pub api_key: String,

    /// API base URL (override for testing)
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlConfig {
    /// Base URL of the crop prediction service
    pub base_url: String,

    /// Request timeout in seconds; the prediction call is best-effort
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8080)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "public")?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.model", "gemini-1.5-flash")?
            .set_default(
                "gemini.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("weather.api_key", "")?
            .set_default("weather.base_url", "https://api.openweathermap.org/data/2.5")?
            .set_default("ml.base_url", "http://localhost:5000")?
            .set_default("ml.timeout_secs", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            static_dir: "public".to_string(),
        }
    }
}
