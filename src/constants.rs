//! Cross-cutting, shared constants.
//!
//! The rule table and the fixed response texts live here so the evaluator, the gateway and
//! the tests all agree on the exact wording.

/// Lowest score an evaluation can produce.
pub const MIN_SCORE: u8 = 1;

/// Highest score an evaluation can produce.
pub const MAX_SCORE: u8 = 5;

/// Trimmed answers longer than this many characters earn the detail bonus.
pub const DETAILED_ANSWER_MIN_CHARS: usize = 150;

pub const TEAMWORK_KEYWORDS: &[&str] =
    &["team", "teamwork", "collaborate", "collaboration", "together"];

pub const COMMUNICATION_KEYWORDS: &[&str] =
    &["communicate", "communication", "listening", "listen", "clarify"];

pub const PROBLEM_SOLVING_KEYWORDS: &[&str] =
    &["resolve", "conflict", "problem", "issue", "solution", "solve"];

pub const TEAMWORK_REASON: &str = "Mentions teamwork.";
pub const COMMUNICATION_REASON: &str = "Mentions communication.";
pub const PROBLEM_SOLVING_REASON: &str = "Mentions problem-solving or conflict resolution.";
pub const DETAIL_REASON: &str = "Provides a detailed and elaborate answer.";

pub const VAGUE_SUMMARY: &str = "Answer is vague and does not clearly show relevant skills.";
pub const GENERIC_IMPROVEMENT: &str =
    "Mention specific skills like teamwork, communication, and problem-solving with a real example.";
pub const CONCRETE_EXAMPLE_IMPROVEMENT: &str =
    "Add a concrete example or situation to demonstrate these skills in practice.";

/// Service name used in the liveness message.
pub const SERVICE_NAME: &str = "Mini AI Interview Screener";
