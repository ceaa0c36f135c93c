//! # memsync Domain Layer
//!
//! Core types for reconciling a managed Grouper group against an
//! authoritative directory member list.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Member ids, membership sets, group query results, deltas, batch types |
//! | [`events`] | Structured events emitted at every synchronization decision point |
//! | [`ports`] | Contracts implemented by providers and infrastructure |
//! | [`error`] | Domain error type and result alias |
//! | [`constants`] | Protocol and default values shared across layers |

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Synchronization events
pub mod events;
/// Port traits
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use events::SyncEvent;
pub use value_objects::{
    BatchConfig, BatchOperation, BatchOutcome, BatchResult, Credentials, DeltaResult,
    GroupQueryResult, MemberId, MembershipSet, SyncReport, SyncStatus,
};
