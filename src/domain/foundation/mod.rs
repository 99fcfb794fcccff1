//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and error
//! types that form the vocabulary of the quiz domain.

mod errors;
mod ids;
mod percentage;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{OptionId, OutcomeId, ProgramId, QuestionId, SessionId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
