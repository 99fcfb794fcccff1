//! Question nodes, their options, and the feedback payloads authored on them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::NodeRef;
use crate::domain::foundation::{OptionId, QuestionId};

/// How the options of a question should be laid out.
///
/// Unknown values are preserved so newer content keeps loading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PresentationHint {
    #[default]
    List,
    Cards,
    Grid,
    Buttons,
    Other(String),
}

impl PresentationHint {
    pub fn as_str(&self) -> &str {
        match self {
            PresentationHint::List => "list",
            PresentationHint::Cards => "cards",
            PresentationHint::Grid => "grid",
            PresentationHint::Buttons => "buttons",
            PresentationHint::Other(s) => s,
        }
    }
}

impl From<String> for PresentationHint {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "list" => PresentationHint::List,
            "cards" => PresentationHint::Cards,
            "grid" => PresentationHint::Grid,
            "buttons" => PresentationHint::Buttons,
            _ => PresentationHint::Other(s),
        }
    }
}

impl From<PresentationHint> for String {
    fn from(hint: PresentationHint) -> Self {
        hint.as_str().to_string()
    }
}

/// Feedback content authored for a single option. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackPayload {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Question-level feedback block: an optional toggle and a side map of
/// per-option payloads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionFeedback {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub messages: HashMap<OptionId, FeedbackPayload>,
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: OptionId,
    /// Display label; may start with a decorative glyph.
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub feedback: Option<FeedbackPayload>,
}

/// A question node as authored in the questions document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub text: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub ui: PresentationHint,
    #[serde(default)]
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub next: Option<HashMap<OptionId, String>>,
    #[serde(default)]
    pub feedback: Option<QuestionFeedback>,
}

/// A question node inside a built graph, with transitions already classified.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: QuestionId,
    text: String,
    subtitle: Option<String>,
    ui: PresentationHint,
    options: Vec<QuizOption>,
    next: Option<HashMap<OptionId, NodeRef>>,
    feedback: Option<QuestionFeedback>,
}

impl Question {
    /// Converts an authored record, classifying each `next` target once.
    pub fn from_record(record: QuestionRecord) -> Self {
        let next = record.next.map(|next| {
            next.into_iter()
                .map(|(option, target)| (option, NodeRef::classify(&target)))
                .collect()
        });

        Self {
            id: record.id,
            text: record.text,
            subtitle: record.subtitle.filter(|s| !s.trim().is_empty()),
            ui: record.ui,
            options: record.options,
            next,
            feedback: record.feedback,
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn ui(&self) -> &PresentationHint {
        &self.ui
    }

    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    pub fn option(&self, id: &OptionId) -> Option<&QuizOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    pub fn has_option(&self, id: &OptionId) -> bool {
        self.option(id).is_some()
    }

    /// Returns true when the question declares a `next` map at all.
    pub fn has_transitions(&self) -> bool {
        self.next.is_some()
    }

    /// Returns where the given option leads, if authored.
    pub fn transition(&self, option: &OptionId) -> Option<&NodeRef> {
        self.next.as_ref().and_then(|next| next.get(option))
    }

    /// Returns the question-level feedback toggle, if authored.
    pub fn feedback_toggle(&self) -> Option<bool> {
        self.feedback.as_ref().and_then(|f| f.enabled)
    }

    /// Returns the feedback payload for an option.
    ///
    /// A payload embedded on the option wins over the question's side map.
    pub fn feedback_payload(&self, option: &OptionId) -> Option<&FeedbackPayload> {
        self.option(option)
            .and_then(|o| o.feedback.as_ref())
            .or_else(|| self.feedback.as_ref().and_then(|f| f.messages.get(option)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OutcomeId;

    fn record_json() -> &'static str {
        r#"{
            "id": "q1",
            "text": "What excites you?",
            "subtitle": "  ",
            "ui": "cards",
            "options": [
                {"id": "a", "label": "🎨 Art", "feedback": {"title": "Nice, {name}"}},
                {"id": "b", "label": "Science"},
                {"id": "c", "label": "Sport"}
            ],
            "next": {"a": "q2", "b": "out_science"},
            "feedback": {
                "enabled": false,
                "messages": {
                    "a": {"message": "side map message"},
                    "b": {"icon": "🔬"}
                }
            }
        }"#
    }

    fn question() -> Question {
        let record: QuestionRecord = serde_json::from_str(record_json()).unwrap();
        Question::from_record(record)
    }

    #[test]
    fn from_record_classifies_transitions() {
        let q = question();
        assert_eq!(
            q.transition(&OptionId::new("a")),
            Some(&NodeRef::Question(QuestionId::new("q2")))
        );
        assert_eq!(
            q.transition(&OptionId::new("b")),
            Some(&NodeRef::Outcome(OutcomeId::new("out_science")))
        );
        assert_eq!(q.transition(&OptionId::new("c")), None);
    }

    #[test]
    fn blank_subtitle_is_dropped() {
        assert_eq!(question().subtitle(), None);
    }

    #[test]
    fn presentation_hint_parses_known_and_unknown_values() {
        assert_eq!(question().ui(), &PresentationHint::Cards);
        let hint: PresentationHint = serde_json::from_str("\"carousel\"").unwrap();
        assert_eq!(hint, PresentationHint::Other("carousel".to_string()));
        assert_eq!(hint.as_str(), "carousel");
    }

    #[test]
    fn embedded_payload_wins_over_side_map() {
        let q = question();
        let payload = q.feedback_payload(&OptionId::new("a")).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Nice, {name}"));
        assert_eq!(payload.message, None);
    }

    #[test]
    fn side_map_payload_used_when_option_has_none() {
        let q = question();
        let payload = q.feedback_payload(&OptionId::new("b")).unwrap();
        assert_eq!(payload.icon.as_deref(), Some("🔬"));
        assert!(q.feedback_payload(&OptionId::new("c")).is_none());
    }

    #[test]
    fn missing_next_map_is_preserved() {
        let record: QuestionRecord =
            serde_json::from_str(r#"{"id": "q9", "text": "?", "options": []}"#).unwrap();
        let q = Question::from_record(record);
        assert!(!q.has_transitions());
        assert!(q.options().is_empty());
        assert_eq!(q.ui(), &PresentationHint::List);
        assert_eq!(q.feedback_toggle(), None);
    }
}
