//! Data Transfer Objects for the HTTP API.
//!
//! The analyze-area body is validated in stages so that each failure maps to
//! the right message: an unusable body is "Invalid request data", a polygon
//! with too few vertices is "Invalid area coordinates", and any remaining
//! shape problem falls back to "Invalid request data".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::{
    Coordinate, DetectionMode, DetectionRequest, Polygon, DEFAULT_SENSITIVITY,
    DEFAULT_TIME_RANGE, MIN_POLYGON_VERTICES,
};
use crate::services::{SimulationError, SimulationResult};

/// Request body for `POST /api/analyze-area`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeAreaRequest {
    /// Polygon vertices as `[lat, lng]` pairs
    pub coordinates: Vec<Coordinate>,
    #[serde(default)]
    pub detection_mode: Option<String>,
    #[serde(default)]
    pub time_range: Option<String>,
    #[serde(default)]
    pub sensitivity: Option<f64>,
}

impl AnalyzeAreaRequest {
    /// Validate a raw request body.
    pub fn parse(body: &[u8]) -> SimulationResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            debug!(error = %e, "Body is not valid JSON");
            SimulationError::InvalidRequest
        })?;

        let coordinates = value
            .as_object()
            .and_then(|object| object.get("coordinates"))
            .ok_or(SimulationError::InvalidRequest)?;

        match coordinates.as_array() {
            Some(points) if points.len() >= MIN_POLYGON_VERTICES => {}
            _ => return Err(SimulationError::InvalidCoordinates),
        }

        serde_path_to_error::deserialize(value).map_err(|e| {
            debug!(path = %e.path(), error = %e.inner(), "Malformed analyze-area body");
            SimulationError::InvalidRequest
        })
    }

    /// Apply defaults and build the domain request.
    pub fn into_request(self) -> SimulationResult<DetectionRequest> {
        Ok(DetectionRequest {
            polygon: Polygon::new(self.coordinates)?,
            mode: self
                .detection_mode
                .as_deref()
                .map(DetectionMode::from_name)
                .unwrap_or_default(),
            time_range: self
                .time_range
                .unwrap_or_else(|| DEFAULT_TIME_RANGE.to_string()),
            sensitivity: self.sensitivity.unwrap_or(DEFAULT_SENSITIVITY),
        })
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version serving the API
    pub version: String,
}
