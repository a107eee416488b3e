use serde::{Deserialize, Serialize};

use crate::scoring::EvaluationResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// An evaluated answer, carrying its original text so callers can correlate after sorting.
pub struct RankedCandidate {
    pub answer: String,
    #[serde(flatten)]
    pub evaluation: EvaluationResult,
}

impl RankedCandidate {
    pub fn new(answer: String, evaluation: EvaluationResult) -> Self {
        Self { answer, evaluation }
    }

    pub fn score(&self) -> u8 {
        self.evaluation.score
    }
}
