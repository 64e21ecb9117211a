//! Error types for zoo operations.
//!
//! Expected negative outcomes (a full enclosure, an incompatible species,
//! removing an animal that is not housed) are reported as `false` by the
//! operation itself. `ZooError` is reserved for caller misuse and policy
//! violations.

use thiserror::Error;

/// Classification of a [`ZooError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Argument does not have the required capability
    Type,
    /// A field value failed domain rules
    Validation,
    /// Role mismatch on assignment
    Permission,
    /// Operation invalid in the current lifecycle state
    State,
    /// Referenced entity is not a member of the expected collection
    NotFound,
}

/// Zoo errors.
#[derive(Error, Debug)]
pub enum ZooError {
    #[error("Wrong entity type: {0}")]
    Type(String),

    #[error("Invalid value: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Invalid state: {0}")]
    State(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ZooError {
    /// The kind of failure, for callers that branch on it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZooError::Type(_) => ErrorKind::Type,
            ZooError::Validation(_) | ZooError::Config(_) => ErrorKind::Validation,
            ZooError::Permission(_) => ErrorKind::Permission,
            ZooError::State(_) => ErrorKind::State,
            ZooError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl From<serde_json::Error> for ZooError {
    fn from(e: serde_json::Error) -> Self {
        ZooError::Config(format!("JSON error: {}", e))
    }
}

pub type ZooResult<T> = Result<T, ZooError>;
