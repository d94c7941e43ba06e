use std::error::Error as _;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};

use super::responses::{ErrorResponse, TranscribeFailureResponse, TranscribeSuccessResponse};
use crate::domain::AudioPayload;
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

#[tracing::instrument(
    skip(state, request_id, headers, body),
    fields(request_id = %request_id.0, bytes = body.len())
)]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let audio = AudioPayload::new(body, content_type);

    match state.transcription_service.transcribe(&audio).await {
        Ok(text) => (StatusCode::OK, Json(TranscribeSuccessResponse::new(text))).into_response(),
        Err(e) => {
            tracing::error!(
                request_id = %request_id.0,
                kind = e.kind(),
                error = %e,
                cause = ?e.source(),
                "Transcription error"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TranscribeFailureResponse::from(&e)),
            )
                .into_response()
        }
    }
}

/// CORS preflight. Headers are attached by the router for every response.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::method_not_allowed()),
    )
}
