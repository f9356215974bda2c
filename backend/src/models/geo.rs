//! Geographic primitives for the analyzed area.

use serde::{Deserialize, Serialize};

use crate::services::error::{SimulationError, SimulationResult};

/// Minimum number of vertices an analyzed area must have.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A (latitude, longitude) pair, carried on the wire as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lng)
    }
}

/// Axis-aligned latitude/longitude extent of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}

/// An ordered ring of at least three vertices.
///
/// The ring does not need to be closed and may self-intersect; only the
/// vertex count is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    pub fn new(vertices: Vec<Coordinate>) -> SimulationResult<Self> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(SimulationError::InvalidCoordinates);
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; construction rejects short rings.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Arithmetic mean of all vertices.
    pub fn centroid(&self) -> Coordinate {
        let n = self.vertices.len() as f64;
        let (sum_lat, sum_lng) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(lat, lng), c| (lat + c.lat, lng + c.lng));
        Coordinate::new(sum_lat / n, sum_lng / n)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lng: f64::INFINITY,
            max_lng: f64::NEG_INFINITY,
        };
        for c in &self.vertices {
            bbox.min_lat = bbox.min_lat.min(c.lat);
            bbox.max_lat = bbox.max_lat.max(c.lat);
            bbox.min_lng = bbox.min_lng.min(c.lng);
            bbox.max_lng = bbox.max_lng.max(c.lng);
        }
        bbox
    }
}

impl TryFrom<Vec<Coordinate>> for Polygon {
    type Error = SimulationError;

    fn try_from(vertices: Vec<Coordinate>) -> SimulationResult<Self> {
        Self::new(vertices)
    }
}
