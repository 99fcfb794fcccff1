//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `content` - Quiz content sources (files, in-memory)

pub mod content;

pub use content::{FileContentSource, InMemoryContentSource};
