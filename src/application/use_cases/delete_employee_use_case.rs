//! Delete employee use case.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::errors::EmployeeError;
use crate::domain::ports::EmployeeRepository;

/// Removes confirmed records from the store.
#[derive(Clone)]
pub struct DeleteEmployeeUseCase {
    repository: Arc<dyn EmployeeRepository>,
}

impl DeleteEmployeeUseCase {
    #[must_use]
    pub const fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Deletes a single record.
    ///
    /// # Errors
    /// Returns `NotFound` if the record is already gone.
    pub fn execute(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        match self.repository.delete(id) {
            Ok(employee) => {
                info!(id = %id, name = %employee.full_name(), "Employee deleted");
                Ok(employee)
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Employee delete failed");
                Err(e)
            }
        }
    }

    /// Deletes every record in `ids`, skipping ones already gone.
    /// Returns the removed records.
    pub fn execute_many(&self, ids: &[EmployeeId]) -> Vec<Employee> {
        ids.iter().filter_map(|id| self.execute(*id).ok()).collect()
    }
}
