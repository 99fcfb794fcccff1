//! Global feedback switches and default wording.

use serde::{Deserialize, Serialize};

/// Token replaced by the participant's name in titles and messages.
pub const NAME_TOKEN: &str = "{name}";

/// Global feedback toggles from the settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSettings {
    /// Master switch; when false no feedback is shown anywhere.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Applicability for questions and options that do not decide themselves.
    #[serde(default = "default_true")]
    pub default_enabled: bool,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_enabled: true,
        }
    }
}

/// The settings document as loaded from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub feedback: FeedbackSettings,
}

fn default_true() -> bool {
    true
}

/// Wording used when a payload is missing fields or absent altogether.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDefaults {
    pub icon: String,
    /// Title template; may contain `{name}`.
    pub title: String,
    /// Message used when a payload exists but has no message.
    pub message: String,
    /// Message used when no payload exists at any layer.
    pub fallback_message: String,
    /// Substituted for `{name}` before a participant is known.
    pub anonymous_name: String,
}

impl Default for FeedbackDefaults {
    fn default() -> Self {
        Self {
            icon: "✨".to_string(),
            title: format!("Great choice, {}!", NAME_TOKEN),
            message: "You're on the right track!".to_string(),
            fallback_message:
                "You're on the right track to finding your perfect teaching pathway!".to_string(),
            anonymous_name: "friend".to_string(),
        }
    }
}
