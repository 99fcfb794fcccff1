//! Feedback module - contextual messages shown between questions.

mod resolver;
mod settings;

pub use resolver::{FeedbackLayer, FeedbackMessage, FeedbackResolver};
pub use settings::{FeedbackDefaults, FeedbackSettings, SettingsDocument, NAME_TOKEN};
