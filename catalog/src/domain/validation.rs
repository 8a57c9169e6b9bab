//! Validation primitives
//!
//! Rule violations are collected into a `ValidationHandler` rather than
//! returned one at a time, so callers see every broken rule at once.

use serde::Serialize;

use crate::error::DomainError;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Ordered list of rule violations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// Collector for rule violations found while checking an entity
pub trait ValidationHandler {
    fn append(&mut self, error: ValidationError);

    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Collecting handler: keeps every error in the order it was reported
#[derive(Debug, Clone, Default)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the errors of another handler into this one
    pub fn append_all<H: ValidationHandler>(&mut self, other: &H) -> &mut Self {
        self.errors.extend(other.errors().iter().cloned());
        self
    }

    /// Escalate a non-empty notification into a domain failure
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.errors.into()))
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
