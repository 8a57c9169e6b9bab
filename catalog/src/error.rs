//! Unified error types for the catalog admin
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and gateway errors
//! - `AppError`: Application layer errors (wraps domain errors for use case callers)

use thiserror::Error;

use crate::domain::validation::{ValidationError, ValidationErrors};

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application layer errors - returned by use cases
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Every validation message carried by this error, if it is a validation failure
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            AppError::Domain(DomainError::Validation(errors)) => Some(errors.as_slice()),
            _ => None,
        }
    }
}
