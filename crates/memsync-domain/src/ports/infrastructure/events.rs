//! Event Sink Port
//!
//! Receives [`SyncEvent`]s as a run progresses. Emission is synchronous and
//! infallible: a sink that cannot deliver an event must swallow the failure
//! rather than disturb the run.

use crate::events::SyncEvent;
use std::sync::Arc;

/// Destination for synchronization events
///
/// Implementations must tolerate interleaved calls from concurrent runs.
pub trait SyncEventSink: Send + Sync {
    /// Record one event
    fn emit(&self, event: &SyncEvent);
}

/// Shared event sink for dependency injection
pub type SharedEventSink = Arc<dyn SyncEventSink>;
