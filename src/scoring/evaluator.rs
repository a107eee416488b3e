use tracing::debug;

use crate::constants::{
    CONCRETE_EXAMPLE_IMPROVEMENT, GENERIC_IMPROVEMENT, MIN_SCORE, VAGUE_SUMMARY,
};

use super::types::{EvaluationResult, EvaluatorMode, ScoringRule};

/// Maps one answer to an [`EvaluationResult`].
///
/// Implementations must be pure: the same answer always yields the same result, and no input
/// is rejected.
pub trait AnswerEvaluator: Send + Sync {
    fn evaluate(&self, answer: &str) -> EvaluationResult;

    fn mode(&self) -> EvaluatorMode;
}

/// Keyword-presence scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Rules that fire for `answer`, in check order.
    pub fn matched_rules(&self, answer: &str) -> Vec<ScoringRule> {
        let lowered = answer.to_lowercase();
        let trimmed_chars = trim_answer(answer).chars().count();

        ScoringRule::ALL
            .into_iter()
            .filter(|rule| rule.matches(&lowered, trimmed_chars))
            .collect()
    }
}

impl AnswerEvaluator for HeuristicEvaluator {
    fn evaluate(&self, answer: &str) -> EvaluationResult {
        let rules = self.matched_rules(answer);
        let score = MIN_SCORE.saturating_add(rules.len() as u8);

        debug!(
            score,
            matched_rules = rules.len(),
            answer_len = answer.len(),
            "Heuristic evaluation complete"
        );

        if rules.is_empty() {
            return EvaluationResult::new(score, VAGUE_SUMMARY, GENERIC_IMPROVEMENT);
        }

        let summary = rules
            .iter()
            .map(ScoringRule::reason)
            .collect::<Vec<_>>()
            .join(" ");

        EvaluationResult::new(score, summary, CONCRETE_EXAMPLE_IMPROVEMENT)
    }

    fn mode(&self) -> EvaluatorMode {
        EvaluatorMode::Heuristic
    }
}

/// Strips leading and trailing whitespace, counting the ASCII information separators
/// (U+001C..=U+001F) as whitespace too.
pub fn trim_answer(answer: &str) -> &str {
    answer.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Evaluator reserved for a language-model backend.
///
/// No model client is wired in, so every answer is scored by the heuristic fallback.
#[derive(Debug, Clone)]
pub struct ModelBackedEvaluator {
    model: String,
    fallback: HeuristicEvaluator,
}

impl ModelBackedEvaluator {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            fallback: HeuristicEvaluator::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl AnswerEvaluator for ModelBackedEvaluator {
    fn evaluate(&self, answer: &str) -> EvaluationResult {
        debug!(model = %self.model, "No model client configured, using heuristic fallback");
        self.fallback.evaluate(answer)
    }

    fn mode(&self) -> EvaluatorMode {
        EvaluatorMode::ModelBacked
    }
}
