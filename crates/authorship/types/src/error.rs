//! Errors raised while parsing the authorship vocabulary.

use thiserror::Error;

/// Errors from parsing untyped tags into the closed vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("unknown authorship status: {0}")]
    UnknownStatus(String),

    #[error("unknown reason code: {0}")]
    UnknownReasonCode(String),

    #[error("unknown export kind: {0}")]
    UnknownExportKind(String),
}
