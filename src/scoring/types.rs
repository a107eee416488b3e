use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    COMMUNICATION_KEYWORDS, COMMUNICATION_REASON, DETAIL_REASON, DETAILED_ANSWER_MIN_CHARS,
    MAX_SCORE, MIN_SCORE, PROBLEM_SOLVING_KEYWORDS, PROBLEM_SOLVING_REASON, TEAMWORK_KEYWORDS,
    TEAMWORK_REASON,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Score, summary and suggestion for a single answer.
pub struct EvaluationResult {
    /// Heuristic score in `MIN_SCORE..=MAX_SCORE`.
    pub score: u8,
    /// Matched criteria, or the vague-answer message.
    pub summary: String,
    /// What the candidate should add next time.
    pub improvement: String,
}

impl EvaluationResult {
    /// Creates a result, clamping `score` into the valid range.
    pub fn new(score: u8, summary: impl Into<String>, improvement: impl Into<String>) -> Self {
        Self {
            score: score.clamp(MIN_SCORE, MAX_SCORE),
            summary: summary.into(),
            improvement: improvement.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One additive rule of the heuristic. Each rule that fires adds one point.
pub enum ScoringRule {
    Teamwork,
    Communication,
    ProblemSolving,
    Detail,
}

impl ScoringRule {
    /// All rules in the order they are checked and reported.
    pub const ALL: [ScoringRule; 4] = [
        ScoringRule::Teamwork,
        ScoringRule::Communication,
        ScoringRule::ProblemSolving,
        ScoringRule::Detail,
    ];

    /// Sentence appended to the summary when the rule fires.
    pub fn reason(&self) -> &'static str {
        match self {
            ScoringRule::Teamwork => TEAMWORK_REASON,
            ScoringRule::Communication => COMMUNICATION_REASON,
            ScoringRule::ProblemSolving => PROBLEM_SOLVING_REASON,
            ScoringRule::Detail => DETAIL_REASON,
        }
    }

    /// Keywords searched for; empty for the length rule.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ScoringRule::Teamwork => TEAMWORK_KEYWORDS,
            ScoringRule::Communication => COMMUNICATION_KEYWORDS,
            ScoringRule::ProblemSolving => PROBLEM_SOLVING_KEYWORDS,
            ScoringRule::Detail => &[],
        }
    }

    /// `lowered` must already be lower-cased; `trimmed_chars` is the character count of the
    /// trimmed original answer.
    pub fn matches(&self, lowered: &str, trimmed_chars: usize) -> bool {
        match self {
            ScoringRule::Detail => trimmed_chars > DETAILED_ANSWER_MIN_CHARS,
            _ => self.keywords().iter().any(|kw| lowered.contains(kw)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which [`AnswerEvaluator`](super::AnswerEvaluator) implementation is in use.
pub enum EvaluatorMode {
    #[default]
    Heuristic,
    ModelBacked,
}

impl EvaluatorMode {
    /// Stable identifier, also used for the `x-screenwise-evaluator` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluatorMode::Heuristic => "heuristic",
            EvaluatorMode::ModelBacked => "model-backed",
        }
    }

    /// Label shown in the liveness message.
    pub fn liveness_label(&self) -> &'static str {
        match self {
            EvaluatorMode::Heuristic => "fallback",
            EvaluatorMode::ModelBacked => "model-backed (fallback)",
        }
    }
}

impl fmt::Display for EvaluatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown evaluator selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEvaluatorMode;

impl FromStr for EvaluatorMode {
    type Err = UnknownEvaluatorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(EvaluatorMode::Heuristic),
            "model" => Ok(EvaluatorMode::ModelBacked),
            _ => Err(UnknownEvaluatorMode),
        }
    }
}
