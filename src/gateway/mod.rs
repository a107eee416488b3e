//! HTTP gateway (Axum) for answer evaluation and candidate ranking.
//!
//! Routes:
//! - `GET /` liveness message naming the evaluator mode
//! - `GET /healthz` health check
//! - `POST /evaluate-answer` score one answer
//! - `POST /rank-candidates` score and sort a batch of answers

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{evaluate_answer_handler, rank_candidates_handler, root_handler};
pub use state::HandlerState;

use crate::scoring::AnswerEvaluator;

/// Response header carrying the health/error status of a response.
pub const SCREENWISE_STATUS_HEADER: &str = "x-screenwise-status";

/// Response header naming the evaluator that produced a result.
pub const SCREENWISE_EVALUATOR_HEADER: &str = "x-screenwise-evaluator";

pub const SCREENWISE_STATUS_HEALTHY: &str = "healthy";

pub fn create_router_with_state<E>(state: HandlerState<E>) -> Router
where
    E: AnswerEvaluator + 'static,
{
    Router::new()
        .route("/", get(root_handler::<E>))
        .route("/healthz", get(health_handler))
        .route("/evaluate-answer", post(evaluate_answer_handler::<E>))
        .route("/rank-candidates", post(rank_candidates_handler::<E>))
        // Answers have no length limit.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SCREENWISE_STATUS_HEADER,
        HeaderValue::from_static(SCREENWISE_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}
