//! Feedback wording configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::feedback::FeedbackDefaults;

/// Default feedback wording; titles and messages may contain `{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_icon")]
    pub default_icon: String,

    #[serde(default = "default_title")]
    pub default_title: String,

    /// Used when a payload exists but carries no message
    #[serde(default = "default_message")]
    pub default_message: String,

    /// Used when no payload exists at any layer
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Substituted for `{name}` before a participant is known
    #[serde(default = "default_anonymous_name")]
    pub anonymous_name: String,
}

impl FeedbackConfig {
    /// Validate feedback configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_title.trim().is_empty() {
            return Err(ValidationError::EmptyFeedbackText("feedback.default_title"));
        }
        if self.default_message.trim().is_empty() {
            return Err(ValidationError::EmptyFeedbackText("feedback.default_message"));
        }
        if self.fallback_message.trim().is_empty() {
            return Err(ValidationError::EmptyFeedbackText("feedback.fallback_message"));
        }
        Ok(())
    }

    /// Wording handed to the feedback resolver
    pub fn to_defaults(&self) -> FeedbackDefaults {
        FeedbackDefaults {
            icon: self.default_icon.clone(),
            title: self.default_title.clone(),
            message: self.default_message.clone(),
            fallback_message: self.fallback_message.clone(),
            anonymous_name: self.anonymous_name.clone(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            default_icon: default_icon(),
            default_title: default_title(),
            default_message: default_message(),
            fallback_message: default_fallback_message(),
            anonymous_name: default_anonymous_name(),
        }
    }
}

fn default_icon() -> String {
    FeedbackDefaults::default().icon
}

fn default_title() -> String {
    FeedbackDefaults::default().title
}

fn default_message() -> String {
    FeedbackDefaults::default().message
}

fn default_fallback_message() -> String {
    FeedbackDefaults::default().fallback_message
}

fn default_anonymous_name() -> String {
    FeedbackDefaults::default().anonymous_name
}
