//! Navigation status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a quiz session currently is.
///
/// ```text
/// NotStarted ─► InQuestion ─► InFeedback ─► InQuestion | InResult
///                    │  ▲
///                    └──┴──► InResult
/// any ─► Error;  any ─► InQuestion (start / restart / back)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStatus {
    #[default]
    NotStarted,
    InQuestion,
    InFeedback,
    InResult,
    Error,
}

impl NavigationStatus {
    /// Returns true while a question (or its feedback) is on screen.
    pub fn is_answering(&self) -> bool {
        matches!(self, NavigationStatus::InQuestion | NavigationStatus::InFeedback)
    }
}

impl StateMachine for NavigationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use NavigationStatus::*;
        match self {
            NotStarted => vec![InQuestion, Error],
            InQuestion => vec![InQuestion, InFeedback, InResult, Error],
            InFeedback => vec![InQuestion, InResult, Error],
            InResult => vec![InQuestion, Error],
            Error => vec![InQuestion, Error],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavigationStatus::*;

    const ALL: [NavigationStatus; 5] = [NotStarted, InQuestion, InFeedback, InResult, Error];

    #[test]
    fn question_can_skip_feedback_straight_to_result() {
        assert!(InQuestion.can_transition_to(&InResult));
        assert!(InQuestion.can_transition_to(&InFeedback));
    }

    #[test]
    fn feedback_only_reachable_from_question() {
        for status in ALL {
            assert_eq!(status.can_transition_to(&InFeedback), status == InQuestion);
        }
    }

    #[test]
    fn error_reachable_from_every_state() {
        for status in ALL {
            assert!(status.can_transition_to(&Error), "{:?} -> Error", status);
        }
    }

    #[test]
    fn restart_reachable_from_every_started_state() {
        for status in [InQuestion, InFeedback, InResult, Error] {
            assert!(status.transition_to(InQuestion).is_ok());
        }
    }

    #[test]
    fn not_started_cannot_jump_to_result() {
        assert!(NotStarted.transition_to(InResult).is_err());
    }

    #[test]
    fn no_status_is_terminal() {
        for status in ALL {
            assert!(!status.is_terminal());
        }
    }

    #[test]
    fn answering_covers_question_and_feedback() {
        assert!(InQuestion.is_answering());
        assert!(InFeedback.is_answering());
        assert!(!InResult.is_answering());
    }
}
