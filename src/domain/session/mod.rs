//! Session module - identity of the person taking the quiz.

mod participant;

pub use participant::{Participant, MAX_NAME_LENGTH, PARENT_YEAR};
