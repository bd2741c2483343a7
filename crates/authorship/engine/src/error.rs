use authorship_types::TypesError;
use thiserror::Error;

/// Errors from the authorship engine.
///
/// Policy outcomes (blocked exports, violations, unverified status) are
/// never errors; only configuration and parsing faults are.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Types(#[from] TypesError),
}
