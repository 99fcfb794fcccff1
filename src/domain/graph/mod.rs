//! Graph module - the externally authored question graph.
//!
//! Questions, options and outcomes are loaded once from content documents
//! and never mutated. Transitions are classified into [`NodeRef`]s at build
//! time; outcome courses are resolved behind [`QuestionGraph::resolve_outcome`].

mod errors;
mod node_ref;
mod outcome;
mod question;
mod question_graph;

pub use errors::{GraphError, LookupError};
pub use node_ref::{NodeRef, OUTCOME_PREFIX};
pub use outcome::{Course, Outcome, OutcomeCourse, OutcomeRecord, Program, ResolvedOutcome};
pub use question::{
    FeedbackPayload, PresentationHint, Question, QuestionFeedback, QuestionRecord, QuizOption,
};
pub use question_graph::{GraphMeta, QuestionGraph, QuestionsDocument};
