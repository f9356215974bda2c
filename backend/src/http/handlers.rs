//! HTTP handlers for the REST API.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use tracing::info;

use super::dto::{AnalyzeAreaRequest, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::DetectionReport;
use crate::services::DetectionSimulator;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/analyze-area
///
/// Validate the submitted polygon and return a simulated detection report.
/// The body is taken as raw bytes so that missing or malformed JSON, and
/// bodies over the size limit, are reported as `{ "error": ... }`.
pub async fn analyze_area(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> HandlerResult<DetectionReport> {
    let body = body?;
    let request = AnalyzeAreaRequest::parse(&body)?.into_request()?;

    let mut simulator = DetectionSimulator::new(state.rng.next_rng());
    let report = simulator.analyze_area(&request)?;

    info!(
        mode = %request.mode,
        vertices = request.polygon.len(),
        total_sites = report.counts.total_sites,
        high_risk = report.counts.high_risk,
        "Area analyzed"
    );

    Ok(Json(report))
}
