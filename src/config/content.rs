//! Content document configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where the quiz documents live
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Questions document (JSON, or YAML by extension)
    #[serde(default = "default_questions_path")]
    pub questions_path: String,

    /// Programs document; a missing file is tolerated
    #[serde(default = "default_programs_path")]
    pub programs_path: Option<String>,

    /// Feedback settings document; a missing file is tolerated
    #[serde(default = "default_settings_path")]
    pub settings_path: Option<String>,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.questions_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("content.questions_path"));
        }
        if is_blank(&self.programs_path) {
            return Err(ValidationError::EmptyPath("content.programs_path"));
        }
        if is_blank(&self.settings_path) {
            return Err(ValidationError::EmptyPath("content.settings_path"));
        }
        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            programs_path: default_programs_path(),
            settings_path: default_settings_path(),
        }
    }
}

fn is_blank(path: &Option<String>) -> bool {
    path.as_deref().is_some_and(|p| p.trim().is_empty())
}

fn default_questions_path() -> String {
    "data/questions.json".to_string()
}

fn default_programs_path() -> Option<String> {
    Some("data/programs.json".to_string())
}

fn default_settings_path() -> Option<String> {
    Some("data/config.json".to_string())
}
