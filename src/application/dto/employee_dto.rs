//! Employee form DTOs.

use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::validation::EmployeeDraft;

/// Whether a form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// New record.
    Create,
    /// Existing record with the given identifier.
    Edit(EmployeeId),
}

impl FormMode {
    /// Returns the verb used in titles and buttons.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit(_) => "Update",
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Edit(id) => write!(f, "edit {id}"),
        }
    }
}

/// Form submission data.
#[derive(Debug, Clone)]
pub struct SaveEmployeeRequest {
    /// Create or edit.
    pub mode: FormMode,
    /// Raw form contents.
    pub draft: EmployeeDraft,
}

impl SaveEmployeeRequest {
    /// Creates new save request.
    #[must_use]
    pub const fn new(mode: FormMode, draft: EmployeeDraft) -> Self {
        Self { mode, draft }
    }
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveEmployeeResponse {
    /// Stored record after the save.
    pub employee: Employee,
    /// Whether the record was newly created.
    pub created: bool,
}

impl SaveEmployeeResponse {
    /// Returns the event name the list view reacts to.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        if self.created {
            "employee-created"
        } else {
            "employee-updated"
        }
    }
}
