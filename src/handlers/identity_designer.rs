use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::handlers::{ApiError, error_body, generate};
use crate::models::{IdentityDesignerRequest, IdentityDesignerResponse};
use crate::prompts::IDENTITY_DESIGNER_PROMPT;
use crate::state::AppState;

pub async fn identity_designer_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<IdentityDesignerRequest>,
) -> Result<Json<IdentityDesignerResponse>, ApiError> {
    if payload.old_assumption.trim().is_empty() {
        return Err(error_body(
            StatusCode::BAD_REQUEST,
            "oldAssumption is required",
        ));
    }
    generate(
        &state,
        &headers,
        "identity-designer",
        IDENTITY_DESIGNER_PROMPT,
        &payload.old_assumption,
    )
    .await
}
