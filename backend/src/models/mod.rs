//! Domain types for area analysis requests and simulated detection reports.

pub mod detection;
pub mod geo;

pub use detection::*;
pub use geo::*;
