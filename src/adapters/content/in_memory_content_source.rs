//! In-Memory Content Source Adapter
//!
//! Serves quiz documents held in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feedback::SettingsDocument;
use crate::domain::graph::{Program, QuestionsDocument};
use crate::ports::{ContentSource, DataLoadError};

const QUESTIONS_KEY: &str = "memory://questions";

/// In-memory content source
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentSource {
    questions: Arc<RwLock<Option<QuestionsDocument>>>,
    programs: Arc<RwLock<Option<Vec<Program>>>>,
    settings: Arc<RwLock<Option<SettingsDocument>>>,
}

impl InMemoryContentSource {
    /// Create a source serving `questions`
    pub fn new(questions: QuestionsDocument) -> Self {
        Self {
            questions: Arc::new(RwLock::new(Some(questions))),
            ..Self::default()
        }
    }

    /// Create a source with no questions document; loading fails with `NotFound`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_programs(self, programs: Vec<Program>) -> Self {
        Self {
            programs: Arc::new(RwLock::new(Some(programs))),
            ..self
        }
    }

    pub fn with_settings(self, settings: SettingsDocument) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Some(settings))),
            ..self
        }
    }

    /// Replace the questions document (useful for tests)
    pub async fn set_questions(&self, questions: QuestionsDocument) {
        *self.questions.write().await = Some(questions);
    }

    /// Drop every document
    pub async fn clear(&self) {
        *self.questions.write().await = None;
        *self.programs.write().await = None;
        *self.settings.write().await = None;
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn load_questions(&self) -> Result<QuestionsDocument, DataLoadError> {
        self.questions
            .read()
            .await
            .clone()
            .ok_or_else(|| DataLoadError::NotFound(QUESTIONS_KEY.to_string()))
    }

    async fn load_programs(&self) -> Result<Option<Vec<Program>>, DataLoadError> {
        Ok(self.programs.read().await.clone())
    }

    async fn load_settings(&self) -> Result<Option<SettingsDocument>, DataLoadError> {
        Ok(*self.settings.read().await)
    }
}
