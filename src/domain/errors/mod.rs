//! Domain error types.

mod employee_error;

pub use employee_error::EmployeeError;
