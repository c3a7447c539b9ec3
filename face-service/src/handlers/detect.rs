use crate::error::{ServiceError, ServiceResult};
use crate::payload::decode_base64_image;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use common::{DetectRequest, DetectResult};
use std::time::Instant;

#[axum::debug_handler]
pub async fn detect_handler(
    State(state): State<AppState>,
    body: Result<Json<DetectRequest>, JsonRejection>,
) -> ServiceResult<Json<DetectResult>> {
    let start = Instant::now();

    let backend = state.readiness.backend().ok_or(ServiceError::NotReady)?;

    let Json(req) = body?;
    let image = decode_base64_image(req.validate()?);

    let mut result = backend.detect(&image)?;
    result.processing_time_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Detection on {} bytes: face_found={} ({}ms)",
        image.len(),
        result.face_found,
        result.processing_time_ms
    );

    Ok(Json(result))
}
