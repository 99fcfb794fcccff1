//! QuizLoader - Load content documents and assemble a playable quiz

use std::sync::Arc;

use crate::domain::feedback::{FeedbackDefaults, FeedbackResolver};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::graph::{GraphError, QuestionGraph};
use crate::domain::navigation::NavigationEngine;
use crate::ports::{ContentSource, DataLoadError};

/// Message shown to participants when content cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load quiz data. Please refresh the page.";

/// Error type for loading a quiz
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    /// A document could not be read or parsed
    #[error(transparent)]
    Data(#[from] DataLoadError),

    /// The documents parsed but do not form a usable graph
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoadError::Data(err) => err.code(),
            LoadError::Graph(err) => err.code(),
        }
    }
}

impl From<LoadError> for DomainError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Data(err) => err.into(),
            LoadError::Graph(err) => err.into(),
        }
    }
}

/// A loaded quiz, shared by every session played on it.
#[derive(Debug, Clone)]
pub struct Quiz {
    graph: Arc<QuestionGraph>,
    feedback: FeedbackResolver,
}

impl Quiz {
    pub fn new(graph: QuestionGraph, feedback: FeedbackResolver) -> Self {
        Self {
            graph: Arc::new(graph),
            feedback,
        }
    }

    pub fn graph(&self) -> &QuestionGraph {
        &self.graph
    }

    pub fn feedback(&self) -> &FeedbackResolver {
        &self.feedback
    }

    /// Creates an engine for one participant's session.
    pub fn new_session(&self) -> NavigationEngine {
        NavigationEngine::new(Arc::clone(&self.graph), self.feedback.clone())
    }
}

/// Handler for loading quizzes from a content source
pub struct QuizLoader {
    source: Arc<dyn ContentSource>,
    defaults: FeedbackDefaults,
}

impl QuizLoader {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            defaults: FeedbackDefaults::default(),
        }
    }

    /// Use `defaults` for feedback wording instead of the built-in text.
    pub fn with_feedback_defaults(mut self, defaults: FeedbackDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Loads all documents concurrently and builds the graph.
    ///
    /// Absent optional documents fall back to no programs and feedback
    /// enabled everywhere. Failures are not retried.
    pub async fn load(&self) -> Result<Quiz, LoadError> {
        let (questions, programs, settings) = tokio::try_join!(
            self.source.load_questions(),
            self.source.load_programs(),
            self.source.load_settings(),
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "quiz content failed to load");
            e
        })?;

        let graph = QuestionGraph::build(questions, programs.unwrap_or_default()).map_err(|e| {
            tracing::warn!(error = %e, "quiz content is malformed");
            e
        })?;
        let settings = settings.unwrap_or_default().feedback;

        tracing::info!(
            questions = graph.question_count(),
            entry = %graph.entry(),
            feedback_enabled = settings.enabled,
            "quiz loaded"
        );

        Ok(Quiz::new(
            graph,
            FeedbackResolver::new(settings, self.defaults.clone()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryContentSource;
    use crate::domain::feedback::{FeedbackSettings, SettingsDocument};
    use crate::domain::graph::{Program, QuestionsDocument};

    fn questions() -> QuestionsDocument {
        serde_json::from_str(
            r#"{
                "questions": [
                    {"id": "q1", "text": "?", "options": [{"id": "a", "label": "A"}], "next": {"a": "out_1"}}
                ],
                "outcomes": [{"id": "out_1", "title": "One", "blurb": "b", "programId": "p1"}]
            }"#,
        )
        .unwrap()
    }

    fn programs() -> Vec<Program> {
        serde_json::from_str(r#"[{"id": "p1", "title": "BEd", "campus": "North", "url": "https://x"}]"#)
            .unwrap()
    }

    #[tokio::test]
    async fn test_load_builds_graph_with_programs() {
        let source = Arc::new(InMemoryContentSource::new(questions()).with_programs(programs()));
        let loader = QuizLoader::new(source);

        let quiz = loader.load().await.unwrap();

        assert_eq!(quiz.graph().entry().as_str(), "q1");
        let resolved = quiz
            .graph()
            .resolve_outcome(&"out_1".into())
            .unwrap();
        assert_eq!(resolved.course.title, "BEd");
    }

    #[tokio::test]
    async fn test_absent_settings_enable_feedback() {
        let loader = QuizLoader::new(Arc::new(InMemoryContentSource::new(questions())));

        let quiz = loader.load().await.unwrap();

        assert_eq!(*quiz.feedback().settings(), FeedbackSettings::default());
    }

    #[tokio::test]
    async fn test_settings_and_defaults_reach_resolver() {
        let settings = SettingsDocument {
            feedback: FeedbackSettings {
                enabled: true,
                default_enabled: false,
            },
        };
        let defaults = FeedbackDefaults {
            icon: "🎯".to_string(),
            ..FeedbackDefaults::default()
        };
        let source = Arc::new(InMemoryContentSource::new(questions()).with_settings(settings));
        let loader = QuizLoader::new(source).with_feedback_defaults(defaults);

        let quiz = loader.load().await.unwrap();

        assert!(!quiz.feedback().settings().default_enabled);
        assert_eq!(quiz.feedback().defaults().icon, "🎯");
    }

    #[tokio::test]
    async fn test_missing_questions_fails() {
        let loader = QuizLoader::new(Arc::new(InMemoryContentSource::empty()));

        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, LoadError::Data(DataLoadError::NotFound(_))));
        assert_eq!(err.code(), ErrorCode::DataLoadFailed);
    }

    #[tokio::test]
    async fn test_empty_graph_fails() {
        let loader = QuizLoader::new(Arc::new(InMemoryContentSource::new(
            QuestionsDocument::default(),
        )));

        let err = loader.load().await.unwrap_err();

        assert_eq!(err, LoadError::Graph(GraphError::EmptyGraph));
        assert_eq!(err.code(), ErrorCode::MalformedGraph);
    }

    #[tokio::test]
    async fn test_sessions_share_graph() {
        let loader = QuizLoader::new(Arc::new(InMemoryContentSource::new(questions())));
        let quiz = loader.load().await.unwrap();

        let first = quiz.new_session();
        let second = quiz.new_session();

        assert_ne!(first.session_id(), second.session_id());
        assert_eq!(first.graph().question_count(), second.graph().question_count());
    }
}
