//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PATHWAY_FINDER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pathway_finder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Questions from {}", config.content.questions_path);
//! ```

mod content;
mod error;
mod feedback;
mod logging;

pub use content::ContentConfig;
pub use error::{ConfigError, ValidationError};
pub use feedback::FeedbackConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Content document locations
    #[serde(default)]
    pub content: ContentConfig,

    /// Default feedback wording
    #[serde(default)]
    pub feedback: FeedbackConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PATHWAY_FINDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PATHWAY_FINDER__CONTENT__QUESTIONS_PATH=quiz.yaml` -> `content.questions_path`
    /// - `PATHWAY_FINDER__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PATHWAY_FINDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for empty paths, empty feedback wording,
    /// or an unparseable log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.content.validate()?;
        self.feedback.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
