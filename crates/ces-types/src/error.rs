use thiserror::Error;

/// Errors produced by entity type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("entity record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("serialization error: {0}")]
    Serialization(String),
}
