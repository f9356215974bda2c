//! Service layer for detection simulation.
//!
//! The simulator is independent of the HTTP layer: it takes a validated
//! [`crate::models::DetectionRequest`] and a random source, and returns a
//! [`crate::models::DetectionReport`].

pub mod catalog;
pub mod error;
pub mod simulator;


pub use error::{SimulationError, SimulationResult};
pub use simulator::DetectionSimulator;
