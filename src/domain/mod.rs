//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Transient user notifications.
pub mod notification;
/// Page arithmetic.
pub mod pagination;
/// Port definitions.
pub mod ports;
/// Form validation rules.
pub mod validation;

pub use entities::{Department, Employee, EmployeeId, EmployeeUpdate, NewEmployee, Position};
pub use errors::EmployeeError;
pub use notification::{Notification, NotificationLevel};
pub use pagination::{PageItem, Pagination};
pub use ports::{EmployeeRepository, StoreEvent};
pub use validation::{EmployeeDraft, Field, ValidationErrors};
