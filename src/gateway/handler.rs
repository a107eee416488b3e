use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::constants::SERVICE_NAME;
use crate::gateway::SCREENWISE_EVALUATOR_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{EvaluateRequest, RankRequest, RootResponse};
use crate::gateway::state::HandlerState;
use crate::ranking::rank_candidates;
use crate::scoring::{AnswerEvaluator, EvaluatorMode};

#[instrument(skip(state))]
pub async fn root_handler<E>(State(state): State<HandlerState<E>>) -> Json<RootResponse>
where
    E: AnswerEvaluator + 'static,
{
    Json(RootResponse {
        message: liveness_message(state.evaluator.mode()),
    })
}

#[instrument(skip(state, payload), fields(mode = tracing::field::Empty))]
pub async fn evaluate_answer_handler<E>(
    State(state): State<HandlerState<E>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    E: AnswerEvaluator + 'static,
{
    tracing::Span::current().record("mode", state.evaluator.mode().as_str());
    let request: EvaluateRequest = parse_request(payload)?;

    debug!(answer_len = request.answer.len(), "Evaluating answer");

    let result = state.evaluator.evaluate(&request.answer);

    info!(score = result.score, "Answer evaluated");

    Ok(make_response(state.evaluator.mode(), result))
}

#[instrument(skip(state, payload), fields(mode = tracing::field::Empty))]
pub async fn rank_candidates_handler<E>(
    State(state): State<HandlerState<E>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    E: AnswerEvaluator + 'static,
{
    tracing::Span::current().record("mode", state.evaluator.mode().as_str());
    let request: RankRequest = parse_request(payload)?;
    let batch_size = request.answers.len();

    let ranked = rank_candidates(state.evaluator.as_ref(), request.answers);

    info!(batch_size, "Candidates ranked");

    Ok(make_response(state.evaluator.mode(), ranked))
}

pub(crate) fn liveness_message(mode: EvaluatorMode) -> String {
    format!(
        "{} is running ({} mode)",
        SERVICE_NAME,
        mode.liveness_label()
    )
}

/// Turns an extracted JSON body into the endpoint's request type.
///
/// Unreadable bodies map to [`GatewayError::InvalidRequest`]; JSON of the wrong shape maps
/// to [`GatewayError::InvalidSchema`].
pub(crate) fn parse_request<T: DeserializeOwned>(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<T, GatewayError> {
    let Json(value) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        GatewayError::InvalidRequest(rejection.body_text())
    })?;

    serde_json::from_value(value).map_err(|e| GatewayError::InvalidSchema(e.to_string()))
}

pub(crate) fn make_response<T: serde::Serialize>(mode: EvaluatorMode, body: T) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SCREENWISE_EVALUATOR_HEADER,
        HeaderValue::from_static(mode.as_str()),
    );

    (StatusCode::OK, headers, Json(body)).into_response()
}
