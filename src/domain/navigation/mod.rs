//! Navigation module - one participant's walk through the question graph.
//!
//! - `engine` - the session state machine driven by user actions
//! - `history` - undo record of answered questions
//! - `status` - lifecycle states and their allowed transitions

mod engine;
mod errors;
mod history;
mod status;

pub use engine::{NavigationEngine, Selection};
pub use errors::NavigationError;
pub use history::{HistoryEntry, HistoryStack};
pub use status::NavigationStatus;
