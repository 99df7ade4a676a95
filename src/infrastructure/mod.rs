//! Infrastructure layer with configuration and store adapters.

/// Application configuration.
pub mod config;
/// In-memory employee store.
pub mod store;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigLoader, LogLevel};
pub use store::{InMemoryEmployeeStore, SeedError};
