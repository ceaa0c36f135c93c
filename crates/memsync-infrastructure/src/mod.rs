// Clippy allows for complex patterns in infrastructure code
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `MEMSYNC__` env vars |
//! | [`bootstrap`] | Builds the reconciler from configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`events`] | Tracing-backed synchronization event sink |
//!
//! ### Inputs
//! | Module | Description |
//! |--------|-------------|
//! | [`inputs`] | Loads member lists and group query results from files |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod events;
pub mod inputs;
pub mod logging;

// Re-export commonly used types
pub use error_ext::ErrorContext;
pub use events::TracingEventSink;
