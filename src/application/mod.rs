//! Application layer - Loading quizzes and projecting sessions into views.
//!
//! This layer orchestrates the domain and the content port. It owns no
//! session state of its own.

pub mod label;
pub mod loader;
pub mod view;

pub use label::split_label_glyph;
pub use loader::{LoadError, Quiz, QuizLoader, LOAD_FAILURE_MESSAGE};
pub use view::{
    render_view, CourseView, ErrorView, FeedbackView, OptionView, QuestionView, QuizView,
    ResultView, RESULT_CLOSING,
};
