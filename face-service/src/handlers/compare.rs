use crate::error::{ServiceError, ServiceResult};
use crate::payload::decode_base64_image;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use common::{CompareRequest, CompareResult};
use std::time::Instant;

/// Compare handler
///
/// Process:
/// 1. Reject with 503 until the backend is installed
/// 2. Validate the body (fields present, http/https URL)
/// 3. Fetch the reference image behind `imageUrl`
/// 4. Score reference against the uploaded image
#[axum::debug_handler]
pub async fn compare_handler(
    State(state): State<AppState>,
    body: Result<Json<CompareRequest>, JsonRejection>,
) -> ServiceResult<Json<CompareResult>> {
    let start = Instant::now();

    let backend = state.readiness.backend().ok_or(ServiceError::NotReady)?;

    let Json(req) = body?;
    let (image_url, base64_image) = req.validate()?;
    let probe = decode_base64_image(base64_image);

    let reference = state.fetcher.fetch(image_url).await?;

    let mut result = backend.compare(&reference, &probe)?;

    // Timing covers fetch and scoring
    result.processing_time_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Compared against {}: match={} distance={:.4} similarity={:.2} ({}ms)",
        image_url,
        result.is_match,
        result.distance,
        result.similarity,
        result.processing_time_ms
    );

    Ok(Json(result))
}
