//! Employee repository port definition.

use tokio::sync::mpsc;

use crate::domain::entities::{Employee, EmployeeId, EmployeeUpdate, NewEmployee};
use crate::domain::errors::EmployeeError;

/// Change notification broadcast after every successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(EmployeeId),
    Updated(EmployeeId),
    Deleted(EmployeeId),
}

/// Port for employee record storage.
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeRepository: Send + Sync {
    /// Returns all records in store order.
    fn list(&self) -> Vec<Employee>;

    /// Looks up a record by identifier.
    fn get(&self, id: EmployeeId) -> Option<Employee>;

    /// Stores a new record under a freshly generated identifier.
    fn add(&self, employee: NewEmployee) -> Employee;

    /// Merges `update` into the record with `id`.
    ///
    /// # Errors
    /// Returns `NotFound` if no record has that identifier.
    fn update(&self, id: EmployeeId, update: EmployeeUpdate) -> Result<Employee, EmployeeError>;

    /// Removes the record with `id`.
    ///
    /// # Errors
    /// Returns `NotFound` if no record has that identifier.
    fn delete(&self, id: EmployeeId) -> Result<Employee, EmployeeError>;

    /// Registers a listener for change notifications.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<StoreEvent>;

    /// Returns number of stored records.
    fn count(&self) -> usize {
        self.list().len()
    }
}
