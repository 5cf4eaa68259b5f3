mod daily_calibration;
mod health;
mod identity_designer;
mod metrics;
mod reality_scan;
mod simulation;
mod weekly_review;

pub use daily_calibration::daily_calibration_handler;
pub use health::health_handler;
pub use identity_designer::identity_designer_handler;
pub use metrics::metrics_handler;
pub use reality_scan::reality_scan_handler;
pub use simulation::simulation_handler;
pub use weekly_review::weekly_review_handler;

use std::time::Instant;

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::guard::{Decision, client_key, retry_message};
use crate::metrics::{REQUEST_REJECTED, REQUEST_TOTAL, TRACKED_CLIENTS, UPSTREAM_LATENCY};
use crate::state::AppState;

pub(crate) type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Shared pipeline for the generation endpoints: admission check, upstream
/// call, parse of the model's JSON output into the endpoint's shape.
pub(crate) async fn generate<T: DeserializeOwned>(
    state: &AppState,
    headers: &HeaderMap,
    endpoint: &'static str,
    system_prompt: &str,
    user_content: &str,
) -> Result<Json<T>, ApiError> {
    REQUEST_TOTAL.inc();

    let client = client_key(headers);
    if let Decision::Rejected {
        reason,
        retry_after,
    } = state.guard.evaluate(&client, Instant::now())
    {
        REQUEST_REJECTED.inc();
        tracing::warn!(endpoint, client = %client, reason = ?reason, "request rejected by admission guard");
        return Err(error_body(
            StatusCode::TOO_MANY_REQUESTS,
            retry_message(retry_after),
        ));
    }
    TRACKED_CLIENTS.set(state.guard.tracked_clients() as f64);

    tracing::info!(endpoint, client = %client, "calling upstream");
    let start = Instant::now();
    let result = state.upstream.complete(system_prompt, user_content).await;
    UPSTREAM_LATENCY.observe(start.elapsed().as_secs_f64());

    let content = result.map_err(|e| {
        tracing::error!(endpoint, error = %e, "upstream call failed");
        error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    serde_json::from_str::<T>(&content).map(Json).map_err(|e| {
        tracing::error!(endpoint, error = %e, raw = %content, "model output was not the expected JSON");
        error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to parse AI response",
        )
    })
}
