use thiserror::Error;

/// Top-level error type for point-sequence operations.
#[derive(Debug, Error)]
pub enum MultiPointError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Errors related to point-sequence operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`MultiPointError`].
pub type Result<T> = std::result::Result<T, MultiPointError>;
