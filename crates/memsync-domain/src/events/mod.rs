//! Synchronization Events
//!
//! Events are immutable facts emitted at each decision point of a
//! reconciliation run. Sinks decide how to render them; the tracing sink in
//! `memsync-infrastructure` turns them into log lines.
//!
//! | Event | Description |
//! |-------|-------------|
//! | [`SyncEvent`] | Every gate check, phase boundary, batch and pause |

/// Synchronization event definitions
pub mod sync_events;

pub use sync_events::SyncEvent;
