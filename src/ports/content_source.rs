//! Content Source Port - Interface for loading quiz content documents.
//!
//! The quiz is driven by three documents: the questions document (required),
//! the programs list and the feedback settings (both optional). Adapters
//! decide where they come from and how they are encoded.

use async_trait::async_trait;

use crate::domain::feedback::SettingsDocument;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::graph::{Program, QuestionsDocument};

/// Errors that can occur while loading content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataLoadError {
    #[error("Content document not found: {0}")]
    NotFound(String),

    #[error("Failed to read '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse '{path}': {reason}")]
    Parse { path: String, reason: String },
}

impl DataLoadError {
    pub fn io(path: impl Into<String>, reason: impl ToString) -> Self {
        DataLoadError::Io {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(path: impl Into<String>, reason: impl ToString) -> Self {
        DataLoadError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::DataLoadFailed
    }
}

impl From<DataLoadError> for DomainError {
    fn from(err: DataLoadError) -> Self {
        let path = match &err {
            DataLoadError::NotFound(path)
            | DataLoadError::Io { path, .. }
            | DataLoadError::Parse { path, .. } => path.clone(),
        };
        DomainError::new(ErrorCode::DataLoadFailed, err.to_string()).with_detail("path", path)
    }
}

/// Port for loading the documents that define a quiz
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Load the questions document
    ///
    /// # Errors
    /// Returns `DataLoadError::NotFound` if the document does not exist
    async fn load_questions(&self) -> Result<QuestionsDocument, DataLoadError>;

    /// Load the programs list
    ///
    /// # Returns
    /// `None` when no programs document is configured or present
    async fn load_programs(&self) -> Result<Option<Vec<Program>>, DataLoadError>;

    /// Load the feedback settings document
    ///
    /// # Returns
    /// `None` when no settings document is configured or present
    async fn load_settings(&self) -> Result<Option<SettingsDocument>, DataLoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_path() {
        let err = DataLoadError::NotFound("data/questions.json".to_string());
        assert!(err.to_string().contains("data/questions.json"));
        assert_eq!(err.code(), ErrorCode::DataLoadFailed);
    }

    #[test]
    fn test_parse_error_converts_to_domain_error() {
        let err = DataLoadError::parse("q.yaml", "expected a mapping");
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::DataLoadFailed);
        assert_eq!(domain.details.get("path"), Some(&"q.yaml".to_string()));
        assert!(domain.message.contains("expected a mapping"));
    }
}
