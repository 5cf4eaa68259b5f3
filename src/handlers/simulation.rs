use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::handlers::{ApiError, error_body, generate};
use crate::models::{SimulationRequest, SimulationResponse};
use crate::prompts::SIMULATION_PROMPT;
use crate::state::AppState;

pub async fn simulation_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<SimulationRequest>,
) -> Result<Json<SimulationResponse>, ApiError> {
    if payload.scenario.trim().is_empty() {
        return Err(error_body(StatusCode::BAD_REQUEST, "scenario is required"));
    }
    generate(
        &state,
        &headers,
        "simulation",
        SIMULATION_PROMPT,
        &payload.scenario,
    )
    .await
}
