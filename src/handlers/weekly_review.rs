use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::handlers::{ApiError, error_body, generate};
use crate::models::{WeeklyReviewRequest, WeeklyReviewResponse};
use crate::prompts::WEEKLY_REVIEW_PROMPT;
use crate::state::AppState;

pub async fn weekly_review_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<WeeklyReviewRequest>,
) -> Result<Json<WeeklyReviewResponse>, ApiError> {
    if payload.week_summary.trim().is_empty() {
        return Err(error_body(
            StatusCode::BAD_REQUEST,
            "Week summary is required.",
        ));
    }
    generate(
        &state,
        &headers,
        "weekly-review",
        WEEKLY_REVIEW_PROMPT,
        &payload.week_summary,
    )
    .await
}
