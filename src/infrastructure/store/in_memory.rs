//! Process-local employee store.

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::domain::entities::{Employee, EmployeeId, EmployeeUpdate, NewEmployee};
use crate::domain::errors::EmployeeError;
use crate::domain::ports::{EmployeeRepository, StoreEvent};

/// Ordered, in-memory employee collection that notifies subscribers after
/// every mutation. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<Vec<Employee>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<StoreEvent>>>,
}

impl InMemoryEmployeeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`, assigning fresh ids.
    /// No notifications are sent for seeded records.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = NewEmployee>) -> Self {
        let employees = records
            .into_iter()
            .map(|record| record.with_id(EmployeeId::generate()))
            .collect();
        Self {
            employees: RwLock::new(employees),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn notify(&self, event: StoreEvent) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(event).is_ok());
        trace!(?event, listeners = subscribers.len(), "Store change broadcast");
    }
}

impl EmployeeRepository for InMemoryEmployeeStore {
    fn list(&self) -> Vec<Employee> {
        self.employees.read().clone()
    }

    fn get(&self, id: EmployeeId) -> Option<Employee> {
        self.employees.read().iter().find(|e| e.id == id).cloned()
    }

    fn add(&self, employee: NewEmployee) -> Employee {
        let employee = employee.with_id(EmployeeId::generate());
        self.employees.write().push(employee.clone());
        debug!(id = %employee.id, "Employee added to store");
        self.notify(StoreEvent::Added(employee.id));
        employee
    }

    fn update(&self, id: EmployeeId, update: EmployeeUpdate) -> Result<Employee, EmployeeError> {
        let updated = {
            let mut employees = self.employees.write();
            let employee = employees
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or(EmployeeError::not_found(id))?;
            update.apply_to(employee);
            employee.clone()
        };
        debug!(id = %id, "Employee updated in store");
        self.notify(StoreEvent::Updated(id));
        Ok(updated)
    }

    fn delete(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        let removed = {
            let mut employees = self.employees.write();
            let index = employees
                .iter()
                .position(|e| e.id == id)
                .ok_or(EmployeeError::not_found(id))?;
            employees.remove(index)
        };
        debug!(id = %id, "Employee removed from store");
        self.notify(StoreEvent::Deleted(id));
        Ok(removed)
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<StoreEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        rx
    }

    fn count(&self) -> usize {
        self.employees.read().len()
    }
}
