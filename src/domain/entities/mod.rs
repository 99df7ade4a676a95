//! Domain entity definitions.

mod employee;

pub use employee::{Department, Employee, EmployeeId, EmployeeUpdate, NewEmployee, Position};
