//! QuizView - presentation-neutral projection of a navigation engine.
//!
//! `render_view` is a pure function of engine state; presenters (the
//! terminal driver, tests) never read the engine directly.

use crate::application::label::split_label_glyph;
use crate::domain::feedback::FeedbackMessage;
use crate::domain::foundation::{DomainError, ErrorCode, OptionId, Percentage, QuestionId};
use crate::domain::graph::{Course, Question};
use crate::domain::navigation::{NavigationEngine, NavigationStatus};

pub const ERROR_TITLE: &str = "Oops!";
pub const RESULT_NOT_FOUND: &str = "Result not found";
pub const QUESTION_NOT_FOUND: &str = "Question not found";
/// Sentence appended to every outcome blurb on the result screen.
pub const RESULT_CLOSING: &str = "This could be your ideal pathway to a rewarding teaching career!";

/// What should be on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizView {
    /// No session started yet; collect name and year.
    Welcome,
    Question(QuestionView),
    Feedback(FeedbackView),
    Result(ResultView),
    Error(ErrorView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: OptionId,
    pub glyph: Option<String>,
    pub text: String,
    pub description: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub question_id: QuestionId,
    pub prompt: String,
    pub subtitle: Option<String>,
    pub ui: String,
    pub options: Vec<OptionView>,
    pub progress: Percentage,
    pub can_go_back: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackView {
    pub message: FeedbackMessage,
    pub progress: Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseView {
    pub title: String,
    pub campus: String,
    pub url: String,
    pub notes: Option<String>,
}

impl From<&Course> for CourseView {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            campus: course.campus.clone(),
            url: course.url.clone(),
            notes: course.notes().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub title: String,
    pub blurb: String,
    pub description: Option<String>,
    pub course: CourseView,
    pub progress: Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub code: ErrorCode,
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
}

impl ErrorView {
    /// Short participant-facing wording; the typed error goes into `detail`.
    pub fn from_error(err: impl Into<DomainError>) -> Self {
        let err: DomainError = err.into();
        let message = if err.code.is_lookup_error() {
            RESULT_NOT_FOUND.to_string()
        } else if err.code == ErrorCode::QuestionNotFound {
            QUESTION_NOT_FOUND.to_string()
        } else {
            err.message.clone()
        };
        Self {
            code: err.code,
            title: ERROR_TITLE.to_string(),
            message,
            detail: Some(err.message),
        }
    }
}

/// Projects the engine's current state into a view.
pub fn render_view(engine: &NavigationEngine) -> QuizView {
    match engine.status() {
        NavigationStatus::NotStarted => QuizView::Welcome,
        NavigationStatus::InQuestion => match engine.current_question() {
            Some(question) => QuizView::Question(question_view(engine, question)),
            None => QuizView::Error(ErrorView::from_error(DomainError::new(
                ErrorCode::QuestionNotFound,
                QUESTION_NOT_FOUND,
            ))),
        },
        NavigationStatus::InFeedback => {
            let message = engine.resolve_feedback().unwrap_or_else(|| {
                let name = engine.participant().map(|p| p.name());
                engine.feedback_resolver().default_message(name)
            });
            QuizView::Feedback(FeedbackView {
                message,
                progress: engine.current_progress(),
            })
        }
        NavigationStatus::InResult => match engine.current_outcome() {
            Some(resolved) => QuizView::Result(ResultView {
                title: result_title(engine),
                blurb: format!("{} {}", resolved.outcome.blurb(), RESULT_CLOSING),
                description: resolved.outcome.description().map(str::to_string),
                course: CourseView::from(resolved.course),
                progress: engine.current_progress(),
            }),
            None => QuizView::Error(ErrorView::from_error(DomainError::new(
                ErrorCode::OutcomeNotFound,
                RESULT_NOT_FOUND,
            ))),
        },
        NavigationStatus::Error => {
            let view = match engine.last_error() {
                Some(err) => ErrorView::from_error(err.clone()),
                None => ErrorView::from_error(DomainError::new(
                    ErrorCode::InternalError,
                    "Something went wrong",
                )),
            };
            QuizView::Error(view)
        }
    }
}

fn question_view(engine: &NavigationEngine, question: &Question) -> QuestionView {
    let selected = engine.selected_option();
    let options = question
        .options()
        .iter()
        .map(|option| {
            let (glyph, text) = split_label_glyph(&option.label);
            OptionView {
                id: option.id.clone(),
                glyph: glyph.map(str::to_string),
                text: text.to_string(),
                description: option.description.clone(),
                selected: selected == Some(&option.id),
            }
        })
        .collect();

    QuestionView {
        question_id: question.id().clone(),
        prompt: question.text().to_string(),
        subtitle: question.subtitle().map(str::to_string),
        ui: question.ui().as_str().to_string(),
        options,
        progress: engine.current_progress(),
        can_go_back: engine.can_go_back(),
    }
}

fn result_title(engine: &NavigationEngine) -> String {
    let name = engine
        .participant()
        .map(|p| p.name())
        .unwrap_or(&engine.feedback_resolver().defaults().anonymous_name);
    format!("Perfect match, {}! 🎉", name)
}
