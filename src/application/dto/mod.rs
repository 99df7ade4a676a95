//! Data transfer objects for the application layer.

mod employee_dto;

pub use employee_dto::{FormMode, SaveEmployeeRequest, SaveEmployeeResponse};
