//! Navigation errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, OptionId, QuestionId};
use crate::domain::graph::{GraphError, LookupError};

/// Errors raised while moving through the question graph.
///
/// All of them leave the engine in `NavigationStatus::Error`; `restart()`
/// recovers as long as the entry question is sound.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    #[error("Option '{option}' of question '{question}' has no transition")]
    MissingTransition {
        question: QuestionId,
        option: OptionId,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl NavigationError {
    pub fn missing_transition(question: QuestionId, option: OptionId) -> Self {
        NavigationError::MissingTransition { question, option }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            NavigationError::MissingTransition { .. } => ErrorCode::MissingTransition,
            NavigationError::Graph(err) => err.code(),
            NavigationError::Lookup(err) => err.code(),
        }
    }
}

impl From<NavigationError> for DomainError {
    fn from(err: NavigationError) -> Self {
        match err {
            NavigationError::MissingTransition { question, option } => {
                let message = format!(
                    "Option '{}' of question '{}' has no transition",
                    option, question
                );
                DomainError::new(ErrorCode::MissingTransition, message)
                    .with_detail("question", question.to_string())
                    .with_detail("option", option.to_string())
            }
            NavigationError::Graph(err) => err.into(),
            NavigationError::Lookup(err) => err.into(),
        }
    }
}
