//! Domain layer containing the quiz's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, value objects, errors)
//! - `graph` - The authored question graph: questions, outcomes, programs
//! - `feedback` - Feedback applicability and message resolution
//! - `progress` - Completion estimates for a traversal
//! - `navigation` - Session state machine over the graph
//! - `session` - Participant identity

pub mod feedback;
pub mod foundation;
pub mod graph;
pub mod navigation;
pub mod progress;
pub mod session;
