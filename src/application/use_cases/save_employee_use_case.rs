//! Create/update employee use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{FormMode, SaveEmployeeRequest, SaveEmployeeResponse};
use crate::domain::errors::EmployeeError;
use crate::domain::ports::EmployeeRepository;
use crate::domain::validation;

/// Validates a form draft and writes it to the store.
#[derive(Clone)]
pub struct SaveEmployeeUseCase {
    repository: Arc<dyn EmployeeRepository>,
    current_year: Option<i32>,
}

impl SaveEmployeeUseCase {
    /// Creates new save use case.
    #[must_use]
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            repository,
            current_year: None,
        }
    }

    /// Pins the reference year for the age rule instead of the local clock.
    #[must_use]
    pub const fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Executes save with provided request.
    ///
    /// # Errors
    /// Returns `Validation` if the draft fails any rule, or `NotFound` when
    /// editing a record that no longer exists.
    pub fn execute(
        &self,
        request: SaveEmployeeRequest,
    ) -> Result<SaveEmployeeResponse, EmployeeError> {
        debug!(mode = %request.mode, "Saving employee");

        let year = self.current_year.unwrap_or_else(validation::current_year);
        let record = request.draft.into_new_employee(year).map_err(|errors| {
            warn!(invalid_fields = errors.len(), "Employee draft rejected");
            EmployeeError::Validation(errors)
        })?;

        match request.mode {
            FormMode::Create => {
                let employee = self.repository.add(record);
                info!(id = %employee.id, name = %employee.full_name(), "Employee created");
                Ok(SaveEmployeeResponse {
                    employee,
                    created: true,
                })
            }
            FormMode::Edit(id) => {
                let employee = self.repository.update(id, record.into()).map_err(|e| {
                    warn!(id = %id, error = %e, "Employee update failed");
                    e
                })?;
                info!(id = %employee.id, name = %employee.full_name(), "Employee updated");
                Ok(SaveEmployeeResponse {
                    employee,
                    created: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Department, EmployeeId, Position};
    use crate::domain::ports::mocks::MockEmployeeRepository;
    use crate::domain::validation::{EmployeeDraft, Field};
    use mockall::predicate::eq;

    const YEAR: i32 = 2026;

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Zeynep".to_string(),
            last_name: "Demir".to_string(),
            date_of_employment: "01/03/2021".to_string(),
            date_of_birth: "14/07/1994".to_string(),
            phone: "5321112233".to_string(),
            email: "zeynep@example.com".to_string(),
            department: "Tech".to_string(),
            position: "Medior".to_string(),
        }
    }

    fn use_case(repository: MockEmployeeRepository) -> SaveEmployeeUseCase {
        SaveEmployeeUseCase::new(Arc::new(repository)).with_current_year(YEAR)
    }

    #[test]
    fn test_create_adds_record() {
        let mut repository = MockEmployeeRepository::new();
        repository
            .expect_add()
            .withf(|record| record.first_name == "Zeynep" && record.department == Department::Tech)
            .times(1)
            .returning(|record| record.with_id(EmployeeId::generate()));

        let response = use_case(repository)
            .execute(SaveEmployeeRequest::new(FormMode::Create, draft()))
            .unwrap();

        assert!(response.created);
        assert_eq!(response.event_name(), "employee-created");
        assert_eq!(response.employee.position, Position::Medior);
    }

    #[test]
    fn test_edit_updates_record() {
        let id = EmployeeId::generate();
        let mut repository = MockEmployeeRepository::new();
        repository
            .expect_update()
            .with(eq(id), mockall::predicate::always())
            .times(1)
            .returning(|id, update| {
                let mut employee = draft().into_new_employee(YEAR).unwrap().with_id(id);
                update.apply_to(&mut employee);
                Ok(employee)
            });
        repository.expect_add().never();

        let response = use_case(repository)
            .execute(SaveEmployeeRequest::new(FormMode::Edit(id), draft()))
            .unwrap();

        assert!(!response.created);
        assert_eq!(response.event_name(), "employee-updated");
        assert_eq!(response.employee.id, id);
    }

    #[test]
    fn test_invalid_draft_never_reaches_store() {
        let mut repository = MockEmployeeRepository::new();
        repository.expect_add().never();
        repository.expect_update().never();

        let mut invalid = draft();
        invalid.phone = "123".to_string();

        let error = use_case(repository)
            .execute(SaveEmployeeRequest::new(FormMode::Create, invalid))
            .unwrap_err();

        let errors = error.validation_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::Phone));
    }

    #[test]
    fn test_edit_missing_record() {
        let id = EmployeeId::generate();
        let mut repository = MockEmployeeRepository::new();
        repository
            .expect_update()
            .returning(|id, _| Err(EmployeeError::not_found(id)));

        let result = use_case(repository).execute(SaveEmployeeRequest::new(FormMode::Edit(id), draft()));

        assert!(matches!(result, Err(EmployeeError::NotFound { id: missing }) if missing == id));
    }
}
