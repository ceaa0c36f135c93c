//! Domain Port Interfaces
//!
//! Boundary contracts between the synchronization use cases and the outside
//! world. Providers and infrastructure implement them; application services
//! depend only on the traits.
//!
//! ## Organization
//!
//! - **providers/** - Remote group management service
//! - **infrastructure/** - Pacing and event sinks

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{Pacer, SharedEventSink, SharedPacer, SyncEventSink};
pub use providers::{GroupMembershipProvider, SharedGroupMembershipProvider};
