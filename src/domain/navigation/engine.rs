//! NavigationEngine - the quiz session state machine.
//!
//! The engine owns every piece of session state (position, transient
//! selection, history, participant) and is driven only by discrete user
//! actions. It holds no reference to any presentation layer; views are
//! computed from its read accessors.
//!
//! # Flow
//!
//! ```text
//! select_option ─► Outcome  ─────────────────────────────► InResult
//!               └► FeedbackCandidate ─► enter_feedback? ─► advance ─► InQuestion | InResult
//! go_back pops one history entry; start/restart reset to the entry question.
//! ```

use std::sync::Arc;

use serde::Serialize;

use super::{HistoryEntry, HistoryStack, NavigationError, NavigationStatus};
use crate::domain::feedback::{FeedbackMessage, FeedbackResolver};
use crate::domain::foundation::{
    OptionId, OutcomeId, Percentage, QuestionId, SessionId, StateMachine,
};
use crate::domain::graph::{GraphError, NodeRef, Question, QuestionGraph, ResolvedOutcome};
use crate::domain::progress::ProgressEstimator;
use crate::domain::session::Participant;

/// What a call to [`NavigationEngine::select_option`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Selection {
    /// The option was not offered by the current question, or no question is active.
    Ignored,
    /// The option leads to another question; the caller decides on feedback.
    FeedbackCandidate(QuestionId),
    /// The option leads to an outcome; the engine has already advanced.
    Outcome(OutcomeId),
}

/// Single-session traversal of a [`QuestionGraph`].
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    graph: Arc<QuestionGraph>,
    feedback: FeedbackResolver,
    progress: ProgressEstimator,
    session_id: SessionId,
    participant: Option<Participant>,
    status: NavigationStatus,
    current: Option<QuestionId>,
    selected: Option<OptionId>,
    history: HistoryStack,
    outcome: Option<OutcomeId>,
    last_error: Option<NavigationError>,
}

impl NavigationEngine {
    /// Creates an engine in `NotStarted`. The progress strategy is picked
    /// from the graph's metadata.
    pub fn new(graph: Arc<QuestionGraph>, feedback: FeedbackResolver) -> Self {
        let progress = ProgressEstimator::for_graph(&graph);
        Self {
            graph,
            feedback,
            progress,
            session_id: SessionId::new(),
            participant: None,
            status: NavigationStatus::NotStarted,
            current: None,
            selected: None,
            history: HistoryStack::new(),
            outcome: None,
            last_error: None,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    /// Starts a brand new session for `participant`.
    ///
    /// Unlike [`restart`](Self::restart) this replaces the participant and
    /// issues a fresh session id.
    ///
    /// # Errors
    ///
    /// Same as [`start`](Self::start).
    pub fn begin_session(&mut self, participant: Participant) -> Result<(), NavigationError> {
        self.session_id = SessionId::new();
        tracing::info!(
            session_id = %self.session_id,
            year = participant.year(),
            "quiz session started"
        );
        self.participant = Some(participant);
        self.start()
    }

    /// Moves to the entry question with empty history and no selection.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::QuestionNotFound` if the entry question is missing.
    pub fn start(&mut self) -> Result<(), NavigationError> {
        self.history.clear();
        self.selected = None;
        self.outcome = None;
        self.last_error = None;
        self.current = None;

        let entry = self.graph.entry().clone();
        if self.graph.question(&entry).is_none() {
            return Err(self.fail(GraphError::QuestionNotFound(entry).into()));
        }

        tracing::debug!(session_id = %self.session_id, entry = %entry, "quiz started");
        self.current = Some(entry);
        self.set_status(NavigationStatus::InQuestion);
        Ok(())
    }

    /// Starts over from the entry question, keeping the participant.
    ///
    /// # Errors
    ///
    /// Same as [`start`](Self::start).
    pub fn restart(&mut self) -> Result<(), NavigationError> {
        tracing::debug!(session_id = %self.session_id, "quiz restarted");
        self.start()
    }

    /// Records `option` as the answer to the current question.
    ///
    /// Options the current question does not offer are ignored. An option
    /// that leads to an outcome advances immediately, bypassing feedback.
    ///
    /// # Errors
    ///
    /// - `GraphError::NoOptions` / `GraphError::NoTransitions` for malformed questions
    /// - `NavigationError::MissingTransition` if the option has no `next` entry
    /// - any error from [`advance`](Self::advance) for outcome-bound options
    pub fn select_option(&mut self, option: &OptionId) -> Result<Selection, NavigationError> {
        if self.status != NavigationStatus::InQuestion {
            tracing::debug!(session_id = %self.session_id, status = ?self.status, "selection ignored");
            return Ok(Selection::Ignored);
        }
        let Some(current) = self.current.clone() else {
            return Ok(Selection::Ignored);
        };

        let graph = Arc::clone(&self.graph);
        let question = match graph.require_question(&current) {
            Ok(question) => question,
            Err(err) => return Err(self.fail(err.into())),
        };
        if question.options().is_empty() {
            return Err(self.fail(GraphError::NoOptions(current).into()));
        }
        if !question.has_transitions() {
            return Err(self.fail(GraphError::NoTransitions(current).into()));
        }
        if !question.has_option(option) {
            tracing::debug!(
                session_id = %self.session_id,
                question = %current,
                option = %option,
                "unknown option ignored"
            );
            return Ok(Selection::Ignored);
        }
        let Some(target) = question.transition(option).cloned() else {
            return Err(self.fail(NavigationError::missing_transition(current, option.clone())));
        };

        tracing::debug!(
            session_id = %self.session_id,
            question = %current,
            option = %option,
            next = target.as_str(),
            "option selected"
        );
        self.selected = Some(option.clone());

        match target {
            NodeRef::Outcome(outcome) => {
                self.advance()?;
                Ok(Selection::Outcome(outcome))
            }
            NodeRef::Question(next) => Ok(Selection::FeedbackCandidate(next)),
        }
    }

    /// Shows feedback for the pending selection when the fallback chain allows it.
    ///
    /// Returns `None`, without changing state, when nothing is selected, the
    /// selection leads to an outcome, or feedback is not applicable.
    pub fn enter_feedback(&mut self) -> Option<FeedbackMessage> {
        if self.status != NavigationStatus::InQuestion || !self.is_feedback_applicable() {
            return None;
        }
        let message = self.resolve_feedback()?;
        self.set_status(NavigationStatus::InFeedback);
        Some(message)
    }

    /// Confirms the pending selection and moves forward one node.
    ///
    /// Does nothing when no option is selected, so a repeated call mutates
    /// state only once.
    ///
    /// # Errors
    ///
    /// - `NavigationError::MissingTransition` if the selection has no `next` entry
    /// - `GraphError::QuestionNotFound` if the next question does not exist
    /// - `LookupError` if the outcome or its program cannot be resolved
    pub fn advance(&mut self) -> Result<(), NavigationError> {
        if !self.status.is_answering() {
            return Ok(());
        }
        let (Some(current), Some(selected)) = (self.current.clone(), self.selected.clone()) else {
            tracing::debug!(session_id = %self.session_id, "advance ignored: nothing selected");
            return Ok(());
        };

        let graph = Arc::clone(&self.graph);
        let question = match graph.require_question(&current) {
            Ok(question) => question,
            Err(err) => return Err(self.fail(err.into())),
        };
        let Some(target) = question.transition(&selected).cloned() else {
            return Err(self.fail(NavigationError::missing_transition(current, selected)));
        };

        self.history.push(HistoryEntry::new(current, selected));
        self.selected = None;

        match target {
            NodeRef::Question(next) => {
                if graph.question(&next).is_none() {
                    return Err(self.fail(GraphError::QuestionNotFound(next).into()));
                }
                tracing::debug!(
                    session_id = %self.session_id,
                    question = %next,
                    depth = self.history.len(),
                    "advanced to question"
                );
                self.current = Some(next);
                self.set_status(NavigationStatus::InQuestion);
            }
            NodeRef::Outcome(outcome) => {
                if let Err(err) = graph.resolve_outcome(&outcome) {
                    return Err(self.fail(err.into()));
                }
                tracing::info!(
                    session_id = %self.session_id,
                    outcome = %outcome,
                    answered = self.history.len(),
                    "result reached"
                );
                self.outcome = Some(outcome);
                self.set_status(NavigationStatus::InResult);
            }
        }
        Ok(())
    }

    /// Undoes the last advance, re-selecting the option chosen there.
    ///
    /// Returns false, without changing state, when history is empty.
    pub fn go_back(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };

        tracing::debug!(
            session_id = %self.session_id,
            question = %entry.question_id,
            option = %entry.selected_option_id,
            "went back"
        );
        self.current = Some(entry.question_id);
        self.selected = Some(entry.selected_option_id);
        self.outcome = None;
        self.last_error = None;
        self.set_status(NavigationStatus::InQuestion);
        true
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    pub fn status(&self) -> NavigationStatus {
        self.status
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn participant(&self) -> Option<&Participant> {
        self.participant.as_ref()
    }

    pub fn graph(&self) -> &QuestionGraph {
        &self.graph
    }

    pub fn feedback_resolver(&self) -> &FeedbackResolver {
        &self.feedback
    }

    /// Id of the question last presented, kept through results and errors.
    pub fn current_question_id(&self) -> Option<&QuestionId> {
        self.current.as_ref()
    }

    /// The question on screen, if the session is answering one.
    pub fn current_question(&self) -> Option<&Question> {
        if !self.status.is_answering() {
            return None;
        }
        self.current.as_ref().and_then(|id| self.graph.question(id))
    }

    pub fn selected_option(&self) -> Option<&OptionId> {
        self.selected.as_ref()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Completion estimate; exactly 100 on a result.
    pub fn current_progress(&self) -> Percentage {
        if self.status == NavigationStatus::InResult {
            return Percentage::HUNDRED;
        }
        self.progress.estimate(self.history.question_ids())
    }

    /// Returns true if feedback should follow the pending selection.
    pub fn is_feedback_applicable(&self) -> bool {
        let (Some(question), Some(selected)) = (self.current_question(), self.selected.as_ref())
        else {
            return false;
        };
        match question.transition(selected) {
            Some(NodeRef::Question(_)) => self.feedback.is_applicable(question, selected),
            _ => false,
        }
    }

    /// Feedback for the pending selection, personalised with the participant's name.
    pub fn resolve_feedback(&self) -> Option<FeedbackMessage> {
        let question = self.current_question()?;
        let selected = self.selected.as_ref()?;
        let name = self.participant.as_ref().map(Participant::name);
        Some(self.feedback.resolve(question, selected, name))
    }

    pub fn is_at_result(&self) -> bool {
        self.status == NavigationStatus::InResult
    }

    pub fn current_outcome_id(&self) -> Option<&OutcomeId> {
        self.outcome.as_ref()
    }

    /// The reached outcome joined with its course.
    pub fn current_outcome(&self) -> Option<ResolvedOutcome<'_>> {
        self.outcome
            .as_ref()
            .and_then(|id| self.graph.resolve_outcome(id).ok())
    }

    /// The error that moved the session into `Error`, if any.
    pub fn last_error(&self) -> Option<&NavigationError> {
        self.last_error.as_ref()
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn set_status(&mut self, target: NavigationStatus) {
        match self.status.transition_to(target) {
            Ok(next) => self.status = next,
            Err(err) => {
                tracing::error!(session_id = %self.session_id, error = %err, "status transition rejected");
            }
        }
    }

    fn fail(&mut self, err: NavigationError) -> NavigationError {
        tracing::warn!(
            session_id = %self.session_id,
            code = %err.code(),
            error = %err,
            "navigation failed"
        );
        self.last_error = Some(err.clone());
        self.set_status(NavigationStatus::Error);
        err
    }
}
