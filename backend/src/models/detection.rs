//! Detection report types.

use serde::Serialize;

use super::geo::{Coordinate, Polygon};

/// Analysis profile selecting which category pool detections are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    #[default]
    Standard,
    Advanced,
    Monitoring,
}

impl DetectionMode {
    /// Resolve a wire name. Unrecognized names fall back to [`DetectionMode::Standard`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "advanced" => DetectionMode::Advanced,
            "monitoring" => DetectionMode::Monitoring,
            _ => DetectionMode::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMode::Standard => "standard",
            DetectionMode::Advanced => "advanced",
            DetectionMode::Monitoring => "monitoring",
        }
    }
}

impl std::fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse severity assigned to each detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

/// One simulated alert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    #[serde(rename = "coordinates")]
    pub location: Coordinate,
    #[serde(rename = "type")]
    pub kind: String,
    pub risk_level: RiskLevel,
    /// Percent, in `[60, 98]`.
    pub confidence: f64,
    /// Hectares, in `[0.1, 2.0]`.
    pub size: f64,
    /// Percent, in `[20, 90]`.
    pub vegetation_density: f64,
    pub description: String,
}

/// Per-risk-level tallies over a set of detections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCounts {
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub total_sites: usize,
}

impl RiskCounts {
    pub fn tally(detections: &[Detection]) -> Self {
        detections
            .iter()
            .fold(RiskCounts::default(), |mut counts, detection| {
                match detection.risk_level {
                    RiskLevel::High => counts.high_risk += 1,
                    RiskLevel::Medium => counts.medium_risk += 1,
                    RiskLevel::Low => counts.low_risk += 1,
                }
                counts.total_sites += 1;
                counts
            })
    }
}

pub const STATUS_SUCCESS: &str = "success";

/// Full response for one analyzed area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub status: String,
    pub detected_areas: Vec<Detection>,
    #[serde(flatten)]
    pub counts: RiskCounts,
}

impl DetectionReport {
    pub fn new(detected_areas: Vec<Detection>) -> Self {
        let counts = RiskCounts::tally(&detected_areas);
        Self {
            status: STATUS_SUCCESS.to_string(),
            detected_areas,
            counts,
        }
    }
}

pub const DEFAULT_TIME_RANGE: &str = "1month";
pub const DEFAULT_SENSITIVITY: f64 = 0.5;

/// A validated analysis request.
///
/// `time_range` and `sensitivity` are accepted and carried through but do
/// not influence the generated report.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRequest {
    pub polygon: Polygon,
    pub mode: DetectionMode,
    pub time_range: String,
    pub sensitivity: f64,
}

impl DetectionRequest {
    /// Request over `polygon` with every optional parameter at its default.
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            mode: DetectionMode::default(),
            time_range: DEFAULT_TIME_RANGE.to_string(),
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }

    pub fn with_mode(mut self, mode: DetectionMode) -> Self {
        self.mode = mode;
        self
    }
}
