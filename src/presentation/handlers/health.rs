use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::responses::HealthResponse;

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::HEALTHY))
}
