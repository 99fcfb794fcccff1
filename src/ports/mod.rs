//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Content Ports
//!
//! - `ContentSource` - Loads the questions, programs and feedback settings documents

mod content_source;

pub use content_source::{ContentSource, DataLoadError};
