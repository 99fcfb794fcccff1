//! Property tests for navigation over generated question graphs.
//!
//! Graphs are acyclic by construction: every option leads either to a later
//! question or to one of three outcomes, so every traversal terminates.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;

use pathway_finder::application::split_label_glyph;
use pathway_finder::domain::feedback::FeedbackResolver;
use pathway_finder::domain::foundation::{OptionId, Percentage};
use pathway_finder::domain::graph::{QuestionGraph, QuestionsDocument};
use pathway_finder::domain::navigation::{NavigationEngine, Selection};

// -- Strategy helpers --

/// One entry per question; each inner value picks an option's target.
fn arb_layout() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..10, 1..4), 1..6)
}

#[derive(Debug, Clone)]
enum Action {
    Select(usize),
    Advance,
    Feedback,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..4).prop_map(Action::Select),
        Just(Action::Advance),
        Just(Action::Feedback),
    ]
}

fn build_graph(layout: &[Vec<u8>]) -> Arc<QuestionGraph> {
    let n = layout.len();
    let questions: Vec<_> = layout
        .iter()
        .enumerate()
        .map(|(i, targets)| {
            let options: Vec<_> = (0..targets.len())
                .map(|j| json!({"id": format!("o{}", j), "label": format!("Option {}", j)}))
                .collect();
            let next: serde_json::Map<_, _> = targets
                .iter()
                .enumerate()
                .map(|(j, &v)| {
                    let remaining = n - i - 1;
                    let target = if remaining > 0 && v < 6 {
                        format!("q{}", i + 1 + usize::from(v) % remaining)
                    } else {
                        format!("out_{}", v % 3)
                    };
                    (format!("o{}", j), json!(target))
                })
                .collect();
            json!({"id": format!("q{}", i), "text": "?", "options": options, "next": next})
        })
        .collect();
    let outcomes: Vec<_> = (0..3)
        .map(|k| {
            json!({
                "id": format!("out_{}", k),
                "title": "Outcome",
                "blurb": "b",
                "course": {"title": "Course", "campus": "Campus", "url": "https://x"}
            })
        })
        .collect();

    let doc: QuestionsDocument =
        serde_json::from_value(json!({"questions": questions, "outcomes": outcomes})).unwrap();
    Arc::new(QuestionGraph::build(doc, vec![]).unwrap())
}

fn option_at(engine: &NavigationEngine, index: usize) -> OptionId {
    engine
        .current_question()
        .and_then(|q| q.options().get(index))
        .map(|o| o.id.clone())
        .unwrap_or_else(|| OptionId::new("not-an-option"))
}

proptest! {
    /// History grows by exactly one per effective advance, progress never
    /// decreases, and going back that many times returns to the entry.
    #[test]
    fn forward_traversal_invariants(
        layout in arb_layout(),
        actions in prop::collection::vec(arb_action(), 0..30),
    ) {
        let mut engine = NavigationEngine::new(build_graph(&layout), FeedbackResolver::default());
        engine.start().unwrap();
        prop_assert_eq!(engine.current_progress(), Percentage::ZERO);

        let mut advances = 0;
        let mut last = Percentage::ZERO;
        for action in actions {
            if engine.is_at_result() {
                break;
            }
            match action {
                Action::Select(index) => {
                    let option = option_at(&engine, index);
                    if let Selection::Outcome(_) = engine.select_option(&option).unwrap() {
                        advances += 1;
                    }
                }
                Action::Advance => {
                    let pending = engine.selected_option().is_some();
                    engine.advance().unwrap();
                    if pending {
                        advances += 1;
                    }
                }
                Action::Feedback => {
                    let _ = engine.enter_feedback();
                }
            }

            let progress = engine.current_progress();
            prop_assert!(progress >= last);
            prop_assert!(progress <= Percentage::HUNDRED);
            prop_assert_eq!(engine.history().len(), advances);
            last = progress;
        }

        if engine.is_at_result() {
            prop_assert_eq!(engine.current_progress(), Percentage::HUNDRED);
        }

        for _ in 0..advances {
            prop_assert!(engine.go_back());
        }
        prop_assert!(engine.history().is_empty());
        prop_assert_eq!(engine.current_question_id(), Some(engine.graph().entry()));
    }

    /// advance then go_back restores position and selection; a second
    /// advance without a new selection is a no-op.
    #[test]
    fn advance_back_round_trip(
        layout in arb_layout(),
        choices in prop::collection::vec(0usize..3, 1..8),
    ) {
        let mut engine = NavigationEngine::new(build_graph(&layout), FeedbackResolver::default());
        engine.start().unwrap();

        for choice in choices {
            if engine.is_at_result() {
                break;
            }
            let Some(count) = engine.current_question().map(|q| q.options().len()) else {
                break;
            };
            let option = option_at(&engine, choice % count);
            let before = engine.current_question_id().cloned();

            if let Selection::FeedbackCandidate(_) = engine.select_option(&option).unwrap() {
                let depth = engine.history().len();
                engine.advance().unwrap();
                engine.advance().unwrap();
                prop_assert_eq!(engine.history().len(), depth + 1);

                prop_assert!(engine.go_back());
                prop_assert_eq!(engine.current_question_id().cloned(), before);
                prop_assert_eq!(engine.selected_option(), Some(&option));

                engine.advance().unwrap();
            } else {
                prop_assert!(engine.is_at_result());
            }
        }
    }

    #[test]
    fn glyph_prefix_is_separated(text in "[A-Za-z][A-Za-z ]{0,20}") {
        let label = format!("🎓 {}", text);
        prop_assert_eq!(split_label_glyph(&label), (Some("🎓"), text.as_str()));
    }

    #[test]
    fn plain_labels_are_untouched(text in "[A-Za-z0-9][A-Za-z0-9 ]{0,20}") {
        prop_assert_eq!(split_label_glyph(&text), (None, text.as_str()));
    }
}
