//! Error types for the detection simulation.

/// Result type for simulation operations.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Failures surfaced by request validation and report generation.
///
/// Validation variants carry fixed messages because callers match on them;
/// the internal variant carries whatever went wrong during generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// The body is missing, is not JSON, or does not have the expected shape.
    #[error("Invalid request data")]
    InvalidRequest,

    /// The polygon has fewer than three vertices.
    #[error("Invalid area coordinates")]
    InvalidCoordinates,

    /// Unexpected failure while assembling the report.
    #[error("{0}")]
    Internal(String),
}

impl SimulationError {
    /// Whether this error was caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SimulationError::InvalidRequest | SimulationError::InvalidCoordinates
        )
    }
}
