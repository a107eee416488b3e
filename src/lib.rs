//! Screenwise library crate (used by the server binary and integration tests).
//!
//! Scores free-text interview answers on a 1 to 5 scale and ranks batches of answers.
//!
//! ## Modules
//! - [`scoring`]: the [`AnswerEvaluator`] seam and its two implementations
//! - [`ranking`]: batch evaluation plus stable descending sort
//! - [`gateway`]: Axum router exposing both over HTTP
//! - [`config`]: `SCREENWISE_*` environment configuration

pub mod config;
pub mod constants;
pub mod gateway;
pub mod ranking;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use gateway::{GatewayError, HandlerState, create_router_with_state};
pub use ranking::{RankedCandidate, rank_candidates};
pub use scoring::{
    AnswerEvaluator, EvaluationResult, EvaluatorMode, HeuristicEvaluator, ModelBackedEvaluator,
    ScoringRule,
};
