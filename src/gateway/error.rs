use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::dispatch::DispatchError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Error body returned to callers: `{"error": "..."}`.
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Dispatch(DispatchError::Compute { .. }) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
