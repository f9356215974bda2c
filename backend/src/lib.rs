//! # Forest Watch
//!
//! Backend for a deforestation-monitoring dashboard. Clients submit an area
//! polygon and receive a simulated list of detection alerts with randomized
//! attributes. No sensing or geospatial analysis takes place: each report is
//! drawn from a random source shaped by the polygon's centroid and bounding box.
//!
//! ## Architecture
//!
//! - [`models`]: coordinates, polygons and detection report types
//! - [`services`]: the detection simulator and its lookup tables
//! - [`config`]: server configuration from TOML and the environment
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
