//! Employee store and workflow errors.

use thiserror::Error;

use crate::domain::entities::EmployeeId;
use crate::domain::validation::ValidationErrors;

/// Employee operation error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum EmployeeError {
    #[error("employee {id} not found")]
    NotFound { id: EmployeeId },

    #[error("employee record has {} invalid field(s)", .0.len())]
    Validation(ValidationErrors),
}

impl EmployeeError {
    /// Creates not found error.
    #[must_use]
    pub const fn not_found(id: EmployeeId) -> Self {
        Self::NotFound { id }
    }

    /// Returns field errors if this is a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ValidationErrors> for EmployeeError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
