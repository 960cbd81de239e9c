use thiserror::Error;

/// Per-argument failures. Both kinds are reported and skipped; they never
/// abort the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VehicleError {
    #[error("invalid kind code: {0}")]
    UnrecognizedKind(i64),

    #[error("invalid input format: {0}")]
    MalformedInput(String),
}
