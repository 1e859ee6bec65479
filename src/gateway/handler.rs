use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::backend::ComputeBackend;
use crate::cache::CacheStore;
use crate::ledger::Ledger;
use crate::scoring::AnswerScorer;

use super::SOURCE_HEADER;
use super::error::ApiError;
use super::payload::ProcessRequest;
use super::state::AppState;

#[instrument(skip(state, request), fields(id = %request.id))]
pub async fn process_handler<C, L, B, S>(
    State(state): State<AppState<C, L, B, S>>,
    Json(request): Json<ProcessRequest>,
) -> Result<Response, ApiError>
where
    C: CacheStore + 'static,
    L: Ledger + 'static,
    B: ComputeBackend + 'static,
    S: AnswerScorer + 'static,
{
    if request.id.trim().is_empty() {
        return Err(ApiError::InvalidRequest("`id` must not be empty".to_string()));
    }
    if request.question.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "`question` must not be empty".to_string(),
        ));
    }

    let question = request.into_question();
    let answered = state.dispatcher.process(&question).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        SOURCE_HEADER,
        HeaderValue::from_static(answered.source.as_str()),
    );

    Ok((StatusCode::OK, headers, Json(answered)).into_response())
}

#[instrument(skip(state))]
pub async fn health_handler<C, L, B, S>(State(state): State<AppState<C, L, B, S>>) -> Response
where
    C: CacheStore + 'static,
    L: Ledger + 'static,
    B: ComputeBackend + 'static,
    S: AnswerScorer + 'static,
{
    let report = state.monitor.check().await;

    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report)).into_response()
}
