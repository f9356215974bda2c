//! Randomized detection report generation.
//!
//! The simulator performs no real sensing. It derives a centroid and a
//! bounding box from the requested polygon, then samples detections around
//! the centroid with offsets scaled by half the box span. All randomness is
//! drawn from the generator passed to [`DetectionSimulator::new`], so a seeded
//! generator yields a reproducible report.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::catalog;
use super::error::{SimulationError, SimulationResult};
use crate::models::{Coordinate, Detection, DetectionReport, DetectionRequest, RiskLevel};

/// Inclusive bounds on the number of detections per report.
pub const MIN_DETECTIONS: usize = 3;
pub const MAX_DETECTIONS: usize = 10;

pub const CONFIDENCE_RANGE: (f64, f64) = (60.0, 98.0);
pub const SIZE_RANGE: (f64, f64) = (0.1, 2.0);
pub const VEGETATION_DENSITY_RANGE: (f64, f64) = (20.0, 90.0);

/// Fraction of the bounding-box span that offsets may cover around the centroid.
const OFFSET_SCALE: f64 = 0.5;

/// Stateless report generator over an injected random source.
pub struct DetectionSimulator<R> {
    rng: R,
}

impl<R: Rng> DetectionSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a simulated detection report for the requested area.
    ///
    /// # Errors
    /// Returns [`SimulationError::Internal`] when the polygon's centroid or
    /// extent cannot be represented as finite numbers.
    pub fn analyze_area(&mut self, request: &DetectionRequest) -> SimulationResult<DetectionReport> {
        let center = request.polygon.centroid();
        let bbox = request.polygon.bounding_box();
        let (lat_span, lng_span) = (bbox.lat_span(), bbox.lng_span());

        if !center.is_finite() || !lat_span.is_finite() || !lng_span.is_finite() {
            return Err(SimulationError::Internal(format!(
                "area extent is not finite (center=({}, {}), span=({}, {}))",
                center.lat, center.lng, lat_span, lng_span
            )));
        }

        let pool = catalog::categories(request.mode);
        let count = self.rng.gen_range(MIN_DETECTIONS..=MAX_DETECTIONS);

        debug!(
            mode = %request.mode,
            vertices = request.polygon.len(),
            time_range = %request.time_range,
            sensitivity = request.sensitivity,
            count,
            "Simulating detections"
        );

        let detections = (0..count)
            .map(|_| self.sample_detection(center, lat_span, lng_span, pool))
            .collect::<SimulationResult<Vec<_>>>()?;

        Ok(DetectionReport::new(detections))
    }

    fn sample_detection(
        &mut self,
        center: Coordinate,
        lat_span: f64,
        lng_span: f64,
        pool: &'static [&'static str],
    ) -> SimulationResult<Detection> {
        let lat_offset = lat_span * (self.rng.gen::<f64>() - 0.5) * OFFSET_SCALE;
        let lng_offset = lng_span * (self.rng.gen::<f64>() - 0.5) * OFFSET_SCALE;

        let kind = pool
            .choose(&mut self.rng)
            .ok_or_else(|| SimulationError::Internal("empty category pool".to_string()))?;
        let risk_level = *RiskLevel::ALL
            .choose(&mut self.rng)
            .ok_or_else(|| SimulationError::Internal("empty risk level set".to_string()))?;
        let confidence = self.uniform(CONFIDENCE_RANGE);
        let size = self.uniform(SIZE_RANGE);
        let vegetation_density = self.uniform(VEGETATION_DENSITY_RANGE);
        let description = catalog::DESCRIPTIONS
            .choose(&mut self.rng)
            .ok_or_else(|| SimulationError::Internal("empty description pool".to_string()))?;

        Ok(Detection {
            location: Coordinate::new(center.lat + lat_offset, center.lng + lng_offset),
            kind: kind.to_string(),
            risk_level,
            confidence,
            size,
            vegetation_density,
            description: description.to_string(),
        })
    }

    fn uniform(&mut self, (low, high): (f64, f64)) -> f64 {
        self.rng.gen_range(low..=high)
    }
}
