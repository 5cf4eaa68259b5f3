use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

use crate::handlers::{ApiError, generate};
use crate::models::DailyCalibrationResponse;
use crate::prompts::DAILY_CALIBRATION_PROMPT;
use crate::state::AppState;

// No request body; the user content is a fixed instruction.
pub async fn daily_calibration_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DailyCalibrationResponse>, ApiError> {
    generate(
        &state,
        &headers,
        "daily-calibration",
        DAILY_CALIBRATION_PROMPT,
        "Generate today's calibration.",
    )
    .await
}
