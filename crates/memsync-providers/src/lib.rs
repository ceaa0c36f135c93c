//! # memsync - Provider Implementations
//!
//! Concrete implementations of the ports defined in `memsync-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Group membership | `GroupMembershipProvider` | Grouper web service |
//! | Pacing | `Pacer` | Tokio sleep, Null |
//! | Events | `SyncEventSink` | Null |
//!
//! ## Usage
//!
//! ```ignore
//! use memsync_providers::grouper::GrouperMembershipProvider;
//! use memsync_providers::pacing::TokioPacer;
//! ```

// Re-export memsync-domain types commonly used with providers
pub use memsync_domain::error::{Error, Result};
pub use memsync_domain::ports::{GroupMembershipProvider, Pacer, SyncEventSink};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration
pub mod http;

/// Grouper web service provider
pub mod grouper;

/// Pacer implementations
pub mod pacing;

/// Event sink implementations
pub mod events;

pub use events::NullEventSink;
pub use grouper::GrouperMembershipProvider;
pub use pacing::{NullPacer, TokioPacer};
