//! Content Adapters
//!
//! Implementations of the ContentSource port.
//!
//! ## Available Adapters
//!
//! - **FileContentSource** - Reads JSON or YAML documents from disk
//! - **InMemoryContentSource** - Serves documents held in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::content::{FileContentSource, InMemoryContentSource};
//!
//! // Production: documents on disk
//! let source = FileContentSource::new("data/questions.json")
//!     .with_programs("data/programs.json")
//!     .with_settings("data/config.json");
//!
//! // Testing: documents built in code
//! let source = InMemoryContentSource::new(questions);
//! ```

mod file_content_source;
mod in_memory_content_source;

pub use file_content_source::{DocumentFormat, FileContentSource};
pub use in_memory_content_source::InMemoryContentSource;
