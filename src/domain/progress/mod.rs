//! Progress module - completion estimates for a traversal.

mod estimator;

pub use estimator::{ProgressEstimator, ProgressStrategy};
