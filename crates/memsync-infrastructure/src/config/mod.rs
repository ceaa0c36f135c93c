//! Configuration management
//!
//! Layered configuration: built-in defaults, then an optional TOML file,
//! then `MEMSYNC__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, GrouperConfig, LoggingConfig, SyncConfig};
