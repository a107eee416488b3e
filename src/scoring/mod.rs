//! Answer evaluation.
//!
//! [`AnswerEvaluator`] is the seam between the gateway and whatever produces a score.
//! [`HeuristicEvaluator`] applies four additive rules to the lower-cased answer:
//!
//! | Rule | Fires when |
//! |------|------------|
//! | Teamwork | any of `team`, `teamwork`, `collaborate`, `collaboration`, `together` |
//! | Communication | any of `communicate`, `communication`, `listening`, `listen`, `clarify` |
//! | Problem solving | any of `resolve`, `conflict`, `problem`, `issue`, `solution`, `solve` |
//! | Detail | trimmed answer is longer than 150 characters |
//!
//! Matching is plain substring containment, so `"teammate"` counts as teamwork. The score
//! starts at 1 and gains one point per rule, giving the range `1..=5`.
//!
//! [`ModelBackedEvaluator`] keeps the shape of a model-driven evaluator but always answers
//! through the heuristic.

pub mod evaluator;
pub mod types;


pub use evaluator::{
    AnswerEvaluator, HeuristicEvaluator, ModelBackedEvaluator, trim_answer,
};
pub use types::{EvaluationResult, EvaluatorMode, ScoringRule, UnknownEvaluatorMode};
