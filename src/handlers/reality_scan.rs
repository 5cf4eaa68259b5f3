use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::handlers::{ApiError, error_body, generate};
use crate::models::{RealityScanRequest, RealityScanResponse};
use crate::prompts::REALITY_SCAN_PROMPT;
use crate::state::AppState;

pub async fn reality_scan_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<RealityScanRequest>,
) -> Result<Json<RealityScanResponse>, ApiError> {
    if payload.text.trim().is_empty() {
        return Err(error_body(StatusCode::BAD_REQUEST, "Text is required"));
    }
    generate(
        &state,
        &headers,
        "reality-scan",
        REALITY_SCAN_PROMPT,
        &payload.text,
    )
    .await
}
