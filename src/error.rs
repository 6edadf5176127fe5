//! Error types for the telemetry fixtures crate

use thiserror::Error;

/// Result type alias for the telemetry fixtures crate
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Main error type for record validation and test-support helpers
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A required field is absent from the record
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// A field is present but carries the wrong JSON type
    #[error("field '{field}' has wrong type: expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    /// A field value falls outside its declared domain
    #[error("field '{field}' out of range: {message}")]
    OutOfRange { field: String, message: String },

    /// A trace carries a status outside the accepted set
    #[error("invalid status '{status}', expected one of: success, error, pending")]
    InvalidStatus { status: String },

    /// An operation exceeded its performance bound
    #[error("{operation} took {duration:.3}s, expected <= {max_duration}s")]
    BoundsExceeded {
        operation: String,
        duration: f64,
        max_duration: f64,
    },

    /// A service did not become ready within the polling deadline
    #[error("{service} did not become ready within {timeout_secs} seconds")]
    ReadinessTimeout { service: String, timeout_secs: u64 },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
