mod config;
mod guard;
mod handlers;
mod metrics;
mod models;
mod prompts;
mod state;
mod upstream;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Args;
use crate::guard::{AdmissionGuard, GuardConfig};
use crate::handlers::{
    daily_calibration_handler, health_handler, identity_designer_handler, metrics_handler,
    reality_scan_handler, simulation_handler, weekly_review_handler,
};
use crate::state::AppState;
use crate::upstream::UpstreamClient;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let guard_config = match GuardConfig::new(
        Duration::from_millis(args.rate_window_ms),
        args.rate_limit as usize,
        Duration::from_millis(args.cooldown_ms),
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid guard configuration: {e}");
            std::process::exit(1);
        }
    };

    let upstream = match UpstreamClient::from_env(
        args.upstream_url.clone(),
        args.model.clone(),
        Duration::from_secs(args.upstream_timeout),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Creating shared state
    let state = Arc::new(AppState {
        upstream,
        guard: AdmissionGuard::new(guard_config),
    });

    // Creating the router with routes
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/reality-scan", post(reality_scan_handler))
        .route("/api/identity-designer", post(identity_designer_handler))
        .route("/api/simulation", post(simulation_handler))
        .route("/api/daily-calibration", post(daily_calibration_handler))
        .route("/api/weekly-review", post(weekly_review_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("Reframe gateway running on http://localhost:{}", args.port);
    println!("Upstream: {} ({})", args.upstream_url, args.model);
    println!(
        "Rate limit: {} requests per {} ms, cooldown {} ms",
        args.rate_limit, args.rate_window_ms, args.cooldown_ms
    );
    axum::serve(listener, app).await.unwrap();
}
