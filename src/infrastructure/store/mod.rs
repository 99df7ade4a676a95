//! Employee store adapters.

mod in_memory;
pub mod seed;

pub use in_memory::InMemoryEmployeeStore;
pub use seed::{SeedError, demo_employees, load_seed_file};
