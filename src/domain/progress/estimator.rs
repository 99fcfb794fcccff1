//! ProgressEstimator - maps answered questions to a completion percentage.
//!
//! Branching trees have path-dependent depth, so the strategy is chosen from
//! whatever calibration the content provides:
//!
//! 1. `StepRatio` when `maxSteps` is declared
//! 2. `WeightedSum` when per-question weights are declared
//! 3. `Flat` over the total number of questions otherwise

use std::collections::HashMap;

use crate::domain::foundation::{Percentage, QuestionId};
use crate::domain::graph::{GraphMeta, QuestionGraph};

/// Algorithm used to turn history into a percentage.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressStrategy {
    StepRatio { max_steps: u32 },
    WeightedSum { weights: HashMap<QuestionId, f64> },
    Flat { total_questions: usize },
}

impl ProgressStrategy {
    /// Selects the first applicable strategy for the given metadata.
    pub fn select(meta: &GraphMeta, total_questions: usize) -> Self {
        match meta.max_steps {
            Some(max_steps) if max_steps > 0 => ProgressStrategy::StepRatio { max_steps },
            _ if !meta.progress_weights.is_empty() => ProgressStrategy::WeightedSum {
                weights: meta.progress_weights.clone(),
            },
            _ => ProgressStrategy::Flat { total_questions },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProgressStrategy::StepRatio { .. } => "step_ratio",
            ProgressStrategy::WeightedSum { .. } => "weighted_sum",
            ProgressStrategy::Flat { .. } => "flat",
        }
    }
}

/// Stateless estimator bound to one graph's calibration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEstimator {
    strategy: ProgressStrategy,
}

impl ProgressEstimator {
    pub fn new(strategy: ProgressStrategy) -> Self {
        Self { strategy }
    }

    /// Builds the estimator a graph calls for.
    pub fn for_graph(graph: &QuestionGraph) -> Self {
        let strategy = ProgressStrategy::select(graph.meta(), graph.question_count());
        tracing::debug!(strategy = strategy.name(), "progress strategy selected");
        Self::new(strategy)
    }

    pub fn strategy(&self) -> &ProgressStrategy {
        &self.strategy
    }

    /// Estimates completion from the ids of answered questions, oldest first.
    ///
    /// Never exceeds 100 and never decreases as more questions are appended.
    pub fn estimate<'a, I>(&self, answered: I) -> Percentage
    where
        I: IntoIterator<Item = &'a QuestionId>,
    {
        let fraction = match &self.strategy {
            ProgressStrategy::StepRatio { max_steps } => {
                answered.into_iter().count() as f64 / f64::from(*max_steps)
            }
            ProgressStrategy::WeightedSum { weights } => answered
                .into_iter()
                .map(|id| weights.get(id).copied().unwrap_or(0.0))
                .sum::<f64>(),
            ProgressStrategy::Flat { total_questions } => {
                if *total_questions == 0 {
                    return Percentage::ZERO;
                }
                answered.into_iter().count() as f64 / *total_questions as f64
            }
        };

        Percentage::from_fraction(fraction.min(1.0))
    }
}
