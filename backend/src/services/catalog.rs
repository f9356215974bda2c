//! Fixed lookup tables used to label simulated detections.

use crate::models::DetectionMode;

const STANDARD_CATEGORIES: &[&str] = &["Deforestation", "Forest Degradation", "Land Use Change"];

const ADVANCED_CATEGORIES: &[&str] = &[
    "Clear Cutting",
    "Selective Logging",
    "Forest Fire",
    "Agricultural Expansion",
];

const MONITORING_CATEGORIES: &[&str] = &["Vegetation Loss", "Canopy Change", "Forest Health"];

/// Canned descriptions attached to detections.
pub const DESCRIPTIONS: [&str; 10] = [
    "Significant vegetation loss detected in this area, indicating possible deforestation activity.",
    "Changes in canopy structure suggest selective logging operations.",
    "Rapid land use change observed, potentially for agricultural expansion.",
    "Forest degradation patterns identified, requiring immediate attention.",
    "Multiple signs of human activity affecting forest health.",
    "Natural forest disturbance detected, monitoring recommended.",
    "Evidence of forest fragmentation and habitat disruption.",
    "Seasonal changes in vegetation density observed.",
    "Potential illegal logging activity identified in this region.",
    "Signs of forest recovery and regeneration present.",
];

/// Category pool for a detection mode. Never empty.
pub fn categories(mode: DetectionMode) -> &'static [&'static str] {
    match mode {
        DetectionMode::Standard => STANDARD_CATEGORIES,
        DetectionMode::Advanced => ADVANCED_CATEGORIES,
        DetectionMode::Monitoring => MONITORING_CATEGORIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_categories() {
        for mode in [
            DetectionMode::Standard,
            DetectionMode::Advanced,
            DetectionMode::Monitoring,
        ] {
            assert!(!categories(mode).is_empty(), "{mode} pool is empty");
        }
    }

    #[test]
    fn test_advanced_pool() {
        assert_eq!(
            categories(DetectionMode::Advanced),
            ["Clear Cutting", "Selective Logging", "Forest Fire", "Agricultural Expansion"]
        );
    }

    #[test]
    fn test_unknown_mode_uses_standard_pool() {
        assert_eq!(
            categories(DetectionMode::from_name("satellite")),
            categories(DetectionMode::Standard)
        );
    }
}
