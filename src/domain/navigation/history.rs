//! History stack - the undo record of answered questions.

use serde::Serialize;

use crate::domain::foundation::{OptionId, QuestionId};

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryEntry {
    pub question_id: QuestionId,
    pub selected_option_id: OptionId,
}

impl HistoryEntry {
    pub fn new(question_id: QuestionId, selected_option_id: OptionId) -> Self {
        Self {
            question_id,
            selected_option_id,
        }
    }
}

/// Append-only-until-popped stack of answered questions.
///
/// Entries are pushed on forward advancement and popped on back navigation;
/// they are never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Ids of answered questions, oldest first.
    pub fn question_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.entries.iter().map(|e| &e.question_id)
    }
}
