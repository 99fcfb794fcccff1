//! File-based Content Source Adapter
//!
//! Reads the quiz documents from disk. Files ending in `.yaml` or `.yml`
//! are parsed as YAML, everything else as JSON.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::ContentConfig;
use crate::domain::feedback::SettingsDocument;
use crate::domain::graph::{Program, QuestionsDocument};
use crate::ports::{ContentSource, DataLoadError};

/// Encoding of a content document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Content source backed by files on disk
#[derive(Debug, Clone)]
pub struct FileContentSource {
    questions_path: PathBuf,
    programs_path: Option<PathBuf>,
    settings_path: Option<PathBuf>,
}

impl FileContentSource {
    /// Create a source that reads only the questions document
    ///
    /// # Example
    /// ```ignore
    /// let source = FileContentSource::new("data/questions.json");
    /// ```
    pub fn new<P: AsRef<Path>>(questions_path: P) -> Self {
        Self {
            questions_path: questions_path.as_ref().to_path_buf(),
            programs_path: None,
            settings_path: None,
        }
    }

    /// Create a source from the content section of the app config
    pub fn from_config(config: &ContentConfig) -> Self {
        Self {
            questions_path: PathBuf::from(&config.questions_path),
            programs_path: config.programs_path.as_ref().map(PathBuf::from),
            settings_path: config.settings_path.as_ref().map(PathBuf::from),
        }
    }

    /// Also read programs from `path`
    pub fn with_programs<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.programs_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Also read feedback settings from `path`
    pub fn with_settings<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.settings_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    /// Read and decode a required document
    async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
        let path_str = path.display().to_string();

        let raw = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataLoadError::NotFound(path_str.clone()),
            _ => DataLoadError::io(path_str.clone(), e),
        })?;

        let document = match DocumentFormat::for_path(path) {
            DocumentFormat::Json => {
                serde_json::from_str(&raw).map_err(|e| DataLoadError::parse(path_str.clone(), e))?
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(&raw).map_err(|e| DataLoadError::parse(path_str.clone(), e))?
            }
        };

        tracing::debug!(path = %path_str, bytes = raw.len(), "content document read");
        Ok(document)
    }

    /// Read an optional document; a missing file is not an error
    async fn read_optional<T: DeserializeOwned>(
        path: Option<&Path>,
    ) -> Result<Option<T>, DataLoadError> {
        let Some(path) = path else {
            return Ok(None);
        };

        match Self::read_document(path).await {
            Ok(document) => Ok(Some(document)),
            Err(DataLoadError::NotFound(missing)) => {
                tracing::debug!(path = %missing, "optional content document absent");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn load_questions(&self) -> Result<QuestionsDocument, DataLoadError> {
        Self::read_document(&self.questions_path).await
    }

    async fn load_programs(&self) -> Result<Option<Vec<Program>>, DataLoadError> {
        Self::read_optional(self.programs_path.as_deref()).await
    }

    async fn load_settings(&self) -> Result<Option<SettingsDocument>, DataLoadError> {
        Self::read_optional(self.settings_path.as_deref()).await
    }
}
