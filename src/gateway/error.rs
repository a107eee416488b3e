use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::SCREENWISE_STATUS_HEADER;

/// Failures at the HTTP boundary. Evaluation itself cannot fail, so these all describe a
/// request that never reached the evaluator.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Body could not be read as JSON.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Body is JSON but does not match the endpoint's request shape.
    #[error("invalid request schema: {0}")]
    InvalidSchema(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, screenwise_status) = match &self {
            GatewayError::InvalidRequest(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_request")
            }
            GatewayError::InvalidSchema(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_schema")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            SCREENWISE_STATUS_HEADER,
            HeaderValue::from_static(screenwise_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
