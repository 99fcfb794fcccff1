//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Configured path is empty: {0}")]
    EmptyPath(&'static str),

    #[error("Feedback text must not be empty: {0}")]
    EmptyFeedbackText(&'static str),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
