//! Use case implementations.

mod delete_employee_use_case;
mod save_employee_use_case;

pub use delete_employee_use_case::DeleteEmployeeUseCase;
pub use save_employee_use_case::SaveEmployeeUseCase;
