//! QuestionGraph - read-only lookup over questions, outcomes and programs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{
    Course, GraphError, LookupError, NodeRef, Outcome, OutcomeCourse, OutcomeRecord, Program,
    Question, QuestionRecord, ResolvedOutcome,
};
use crate::domain::foundation::{OptionId, OutcomeId, ProgramId, QuestionId};

/// Authoring metadata that calibrates entry and progress.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMeta {
    /// Entry question; the first question is used when absent.
    #[serde(default)]
    pub entry: Option<QuestionId>,

    /// Expected number of answered questions on the longest path.
    #[serde(default)]
    pub max_steps: Option<u32>,

    /// Fractional contribution of each question to overall progress.
    #[serde(default)]
    pub progress_weights: HashMap<QuestionId, f64>,
}

/// The questions document as loaded from content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestionsDocument {
    #[serde(default)]
    pub meta: GraphMeta,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
    #[serde(default)]
    pub outcomes: Vec<OutcomeRecord>,
}

/// Immutable directed graph of questions and terminal outcomes.
///
/// Construction checks the entry point and metadata only. Dangling `next`
/// targets, cycles and unreachable outcomes surface lazily during traversal.
#[derive(Debug, Clone)]
pub struct QuestionGraph {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
    outcomes: HashMap<OutcomeId, Outcome>,
    programs: HashMap<ProgramId, Program>,
    entry: QuestionId,
    meta: GraphMeta,
}

impl QuestionGraph {
    /// Builds a graph from the questions document and the optional programs list.
    ///
    /// # Errors
    ///
    /// - `EmptyGraph` if there are no questions
    /// - `DuplicateQuestion` / `DuplicateOutcome` for repeated ids
    /// - `EntryNotFound` if `meta.entry` names a missing question
    /// - `InvalidWeight` for negative or non-finite progress weights
    /// - `InvalidMaxSteps` if `meta.maxSteps` is zero
    pub fn build(document: QuestionsDocument, programs: Vec<Program>) -> Result<Self, GraphError> {
        let QuestionsDocument {
            meta,
            questions: records,
            outcomes: outcome_records,
        } = document;

        if records.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if meta.max_steps == Some(0) {
            return Err(GraphError::InvalidMaxSteps);
        }
        if let Some((question, weight)) = meta
            .progress_weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(GraphError::InvalidWeight {
                question: question.clone(),
                weight: *weight,
            });
        }

        let mut questions = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            if index.contains_key(&record.id) {
                return Err(GraphError::DuplicateQuestion(record.id));
            }
            index.insert(record.id.clone(), questions.len());
            questions.push(Question::from_record(record));
        }

        let mut outcomes = HashMap::with_capacity(outcome_records.len());
        for record in outcome_records {
            let outcome = Outcome::from_record(record);
            if outcomes.contains_key(outcome.id()) {
                return Err(GraphError::DuplicateOutcome(outcome.id().clone()));
            }
            outcomes.insert(outcome.id().clone(), outcome);
        }

        let entry = match &meta.entry {
            Some(entry) if !index.contains_key(entry) => {
                return Err(GraphError::EntryNotFound(entry.clone()));
            }
            Some(entry) => entry.clone(),
            None => questions[0].id().clone(),
        };

        // Later programs with the same id replace earlier ones.
        let programs: HashMap<_, _> = programs.into_iter().map(|p| (p.id.clone(), p)).collect();

        tracing::debug!(
            entry = %entry,
            questions = questions.len(),
            outcomes = outcomes.len(),
            programs = programs.len(),
            "question graph built"
        );

        Ok(Self {
            questions,
            index,
            outcomes,
            programs,
            entry,
            meta,
        })
    }

    /// The question every session starts from.
    pub fn entry(&self) -> &QuestionId {
        &self.entry
    }

    pub fn meta(&self) -> &GraphMeta {
        &self.meta
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Looks up a question, failing with `QuestionNotFound`.
    pub fn require_question(&self, id: &QuestionId) -> Result<&Question, GraphError> {
        self.question(id)
            .ok_or_else(|| GraphError::QuestionNotFound(id.clone()))
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn outcome(&self, id: &OutcomeId) -> Option<&Outcome> {
        self.outcomes.get(id)
    }

    pub fn program(&self, id: &ProgramId) -> Option<&Program> {
        self.programs.get(id)
    }

    /// Returns where an option of a question leads.
    pub fn transition(&self, question: &QuestionId, option: &OptionId) -> Option<&NodeRef> {
        self.question(question).and_then(|q| q.transition(option))
    }

    /// Resolves an outcome together with the course it recommends.
    ///
    /// Hides whether the course was embedded or referenced by program id.
    pub fn resolve_outcome(&self, id: &OutcomeId) -> Result<ResolvedOutcome<'_>, LookupError> {
        let outcome = self
            .outcome(id)
            .ok_or_else(|| LookupError::OutcomeNotFound(id.clone()))?;

        let course: &Course = match outcome.course() {
            Some(OutcomeCourse::Embedded(course)) => course,
            Some(OutcomeCourse::Referenced(program_id)) => {
                &self
                    .program(program_id)
                    .ok_or_else(|| LookupError::ProgramNotFound {
                        outcome: id.clone(),
                        program: program_id.clone(),
                    })?
                    .course
            }
            None => return Err(LookupError::NoCourse(id.clone())),
        };

        Ok(ResolvedOutcome { outcome, course })
    }
}
