//! NodeRef - discriminated reference to the node an option leads to.

use serde::Serialize;

use crate::domain::foundation::{OutcomeId, QuestionId};

/// Reserved prefix that marks a `next` target as an outcome.
pub const OUTCOME_PREFIX: &str = "out_";

/// Target of a transition: another question or a terminal outcome.
///
/// Classified once when the graph is built so traversal code never inspects
/// id prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum NodeRef {
    Question(QuestionId),
    Outcome(OutcomeId),
}

impl NodeRef {
    /// Classifies a raw node id using the reserved outcome prefix.
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with(OUTCOME_PREFIX) {
            NodeRef::Outcome(OutcomeId::new(raw))
        } else {
            NodeRef::Question(QuestionId::new(raw))
        }
    }

    pub fn is_outcome(&self) -> bool {
        matches!(self, NodeRef::Outcome(_))
    }

    /// Returns the raw id regardless of kind.
    pub fn as_str(&self) -> &str {
        match self {
            NodeRef::Question(id) => id.as_str(),
            NodeRef::Outcome(id) => id.as_str(),
        }
    }
}
