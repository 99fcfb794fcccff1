//! FeedbackResolver - decides whether and what to show after an option is picked.
//!
//! Content authors attach feedback in two layouts: a payload embedded on the
//! option, or a question-level side map keyed by option id. Both are the same
//! logical lookup ([`Question::feedback_payload`]); this module only applies
//! the fallback chain on top of it.

use serde::Serialize;

use super::{FeedbackDefaults, FeedbackSettings, NAME_TOKEN};
use crate::domain::foundation::OptionId;
use crate::domain::graph::Question;

/// The layer of configuration that decided applicability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackLayer {
    /// Master switch is off.
    Disabled,
    /// The option carries its own payload.
    Option,
    /// The question declares a feedback toggle.
    Question,
    /// The global default applies.
    Global,
}

/// Feedback ready for display, with the name already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackMessage {
    pub icon: String,
    pub title: String,
    pub message: String,
}

/// Applies the option → question → global fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackResolver {
    settings: FeedbackSettings,
    defaults: FeedbackDefaults,
}

impl FeedbackResolver {
    pub fn new(settings: FeedbackSettings, defaults: FeedbackDefaults) -> Self {
        Self { settings, defaults }
    }

    pub fn settings(&self) -> &FeedbackSettings {
        &self.settings
    }

    pub fn defaults(&self) -> &FeedbackDefaults {
        &self.defaults
    }

    /// Returns the single layer that decides applicability for this pair.
    pub fn decided_by(&self, question: &Question, option: &OptionId) -> FeedbackLayer {
        if !self.settings.enabled {
            FeedbackLayer::Disabled
        } else if question.feedback_payload(option).is_some() {
            FeedbackLayer::Option
        } else if question.feedback_toggle().is_some() {
            FeedbackLayer::Question
        } else {
            FeedbackLayer::Global
        }
    }

    /// Returns true if feedback should be shown after picking `option`.
    pub fn is_applicable(&self, question: &Question, option: &OptionId) -> bool {
        match self.decided_by(question, option) {
            FeedbackLayer::Disabled => false,
            FeedbackLayer::Option => true,
            FeedbackLayer::Question => question.feedback_toggle().unwrap_or(false),
            FeedbackLayer::Global => self.settings.default_enabled,
        }
    }

    /// Resolves the message for `option`, personalised with `name`.
    ///
    /// Missing payload fields fall back to the defaults; with no payload at
    /// all the default triple is returned.
    pub fn resolve(&self, question: &Question, option: &OptionId, name: Option<&str>) -> FeedbackMessage {
        let name = name.unwrap_or(&self.defaults.anonymous_name);

        match question.feedback_payload(option) {
            Some(payload) => FeedbackMessage {
                icon: payload
                    .icon
                    .clone()
                    .unwrap_or_else(|| self.defaults.icon.clone()),
                title: personalise(
                    payload.title.as_deref().unwrap_or(&self.defaults.title),
                    name,
                ),
                message: personalise(
                    payload.message.as_deref().unwrap_or(&self.defaults.message),
                    name,
                ),
            },
            None => self.default_message(Some(name)),
        }
    }

    /// The fixed triple used when no payload exists at any layer.
    pub fn default_message(&self, name: Option<&str>) -> FeedbackMessage {
        let name = name.unwrap_or(&self.defaults.anonymous_name);
        FeedbackMessage {
            icon: self.defaults.icon.clone(),
            title: personalise(&self.defaults.title, name),
            message: personalise(&self.defaults.fallback_message, name),
        }
    }
}

fn personalise(template: &str, name: &str) -> String {
    template.replace(NAME_TOKEN, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::QuestionRecord;

    fn question(json: &str) -> Question {
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        Question::from_record(record)
    }

    fn plain_question() -> Question {
        question(
            r#"{"id": "q1", "text": "?", "options": [{"id": "a", "label": "A"}], "next": {"a": "q2"}}"#,
        )
    }

    fn toggled_question(enabled: bool) -> Question {
        question(&format!(
            r#"{{"id": "q1", "text": "?", "options": [{{"id": "a", "label": "A"}}, {{"id": "b", "label": "B", "feedback": {{"title": "Bold move, {{name}}"}}}}],
                "next": {{"a": "q2", "b": "q3"}}, "feedback": {{"enabled": {}}}}}"#,
            enabled
        ))
    }

    fn resolver(enabled: bool, default_enabled: bool) -> FeedbackResolver {
        FeedbackResolver::new(
            FeedbackSettings {
                enabled,
                default_enabled,
            },
            FeedbackDefaults::default(),
        )
    }

    // ───────────────────────────────────────────────────────────────
    // Applicability chain
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn global_default_decides_plain_questions() {
        let q = plain_question();
        let a = OptionId::new("a");
        assert_eq!(resolver(true, true).decided_by(&q, &a), FeedbackLayer::Global);
        assert!(resolver(true, true).is_applicable(&q, &a));
        assert!(!resolver(true, false).is_applicable(&q, &a));
    }

    #[test]
    fn question_toggle_overrides_global_default() {
        let a = OptionId::new("a");
        let off = toggled_question(false);
        assert_eq!(resolver(true, true).decided_by(&off, &a), FeedbackLayer::Question);
        assert!(!resolver(true, true).is_applicable(&off, &a));

        let on = toggled_question(true);
        assert!(resolver(true, false).is_applicable(&on, &a));
    }

    #[test]
    fn option_payload_overrides_question_toggle() {
        let q = toggled_question(false);
        let b = OptionId::new("b");
        assert_eq!(resolver(true, false).decided_by(&q, &b), FeedbackLayer::Option);
        assert!(resolver(true, false).is_applicable(&q, &b));
    }

    #[test]
    fn master_switch_disables_every_layer() {
        let q = toggled_question(true);
        let r = resolver(false, true);
        assert_eq!(r.decided_by(&q, &OptionId::new("b")), FeedbackLayer::Disabled);
        assert!(!r.is_applicable(&q, &OptionId::new("a")));
        assert!(!r.is_applicable(&q, &OptionId::new("b")));
    }

    // ───────────────────────────────────────────────────────────────
    // Message resolution
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn resolve_without_payload_returns_default_triple() {
        let msg = resolver(true, true).resolve(&plain_question(), &OptionId::new("a"), Some("Ana"));
        assert_eq!(msg.icon, "✨");
        assert_eq!(msg.title, "Great choice, Ana!");
        assert_eq!(
            msg.message,
            "You're on the right track to finding your perfect teaching pathway!"
        );
    }

    #[test]
    fn resolve_fills_missing_payload_fields() {
        let q = toggled_question(true);
        let msg = resolver(true, true).resolve(&q, &OptionId::new("b"), Some("Ana"));
        assert_eq!(msg.icon, "✨");
        assert_eq!(msg.title, "Bold move, Ana");
        assert_eq!(msg.message, "You're on the right track!");
    }

    #[test]
    fn resolve_uses_side_map_payload() {
        let q = question(
            r#"{"id": "q1", "text": "?", "options": [{"id": "a", "label": "A"}], "next": {"a": "q2"},
                "feedback": {"messages": {"a": {"icon": "🎯", "title": "On target", "message": "Keep going, {name}."}}}}"#,
        );
        let msg = resolver(true, true).resolve(&q, &OptionId::new("a"), Some("Lee"));
        assert_eq!(
            msg,
            FeedbackMessage {
                icon: "🎯".to_string(),
                title: "On target".to_string(),
                message: "Keep going, Lee.".to_string(),
            }
        );
    }

    #[test]
    fn resolve_without_name_uses_anonymous_name() {
        let msg = resolver(true, true).resolve(&plain_question(), &OptionId::new("a"), None);
        assert_eq!(msg.title, "Great choice, friend!");
    }
}
