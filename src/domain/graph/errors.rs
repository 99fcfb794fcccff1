//! Graph integrity and lookup errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, OutcomeId, ProgramId, QuestionId};

/// Malformed authoring data in the question graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Question graph has no questions")]
    EmptyGraph,

    #[error("Question '{0}' is defined more than once")]
    DuplicateQuestion(QuestionId),

    #[error("Outcome '{0}' is defined more than once")]
    DuplicateOutcome(OutcomeId),

    #[error("Entry question '{0}' does not exist")]
    EntryNotFound(QuestionId),

    #[error("Question '{0}' not found")]
    QuestionNotFound(QuestionId),

    #[error("Question '{0}' has no options")]
    NoOptions(QuestionId),

    #[error("Question '{0}' has no transitions")]
    NoTransitions(QuestionId),

    #[error("Progress weight for '{question}' must be a non-negative number, got {weight}")]
    InvalidWeight { question: QuestionId, weight: f64 },

    #[error("maxSteps must be greater than zero")]
    InvalidMaxSteps,
}

impl GraphError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GraphError::QuestionNotFound(_) | GraphError::EntryNotFound(_) => {
                ErrorCode::QuestionNotFound
            }
            _ => ErrorCode::MalformedGraph,
        }
    }
}

impl From<GraphError> for DomainError {
    fn from(err: GraphError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Failure to resolve a result for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Outcome '{0}' not found")]
    OutcomeNotFound(OutcomeId),

    #[error("Program '{program}' for outcome '{outcome}' not found")]
    ProgramNotFound {
        outcome: OutcomeId,
        program: ProgramId,
    },

    #[error("Outcome '{0}' does not recommend a course")]
    NoCourse(OutcomeId),
}

impl LookupError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LookupError::OutcomeNotFound(_) => ErrorCode::OutcomeNotFound,
            LookupError::ProgramNotFound { .. } => ErrorCode::ProgramNotFound,
            LookupError::NoCourse(_) => ErrorCode::CourseMissing,
        }
    }
}

impl From<LookupError> for DomainError {
    fn from(err: LookupError) -> Self {
        let outcome = match &err {
            LookupError::OutcomeNotFound(id)
            | LookupError::NoCourse(id)
            | LookupError::ProgramNotFound { outcome: id, .. } => id.to_string(),
        };
        DomainError::new(err.code(), err.to_string()).with_detail("outcome", outcome)
    }
}
