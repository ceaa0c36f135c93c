//! Synchronization event definitions

use crate::value_objects::{BatchOperation, BatchOutcome};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Structured events emitted during reconciliation and synchronization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SyncEvent {
    /// Delta between the two sources was computed
    DeltaComputed {
        /// Managed group name
        group: String,
        /// Members present in both sources
        common: usize,
        /// Members pending addition
        adds: usize,
        /// Members pending removal
        drops: usize,
    },
    /// Pending changes exceed the safety threshold; nothing will be submitted
    ThresholdExceeded {
        /// Adds plus drops
        total_delta: usize,
        /// Configured threshold
        sync_max: usize,
    },
    /// Gate passed; batches are about to be submitted
    SyncStarted {
        /// Managed group name
        group: String,
        /// Maximum members per request
        batch_size: usize,
        /// Per-request deadline
        batch_timeout: Duration,
        /// Pause after each batch
        batch_delay: Duration,
    },
    /// A phase is starting
    PhaseStarted {
        /// Phase operation
        operation: BatchOperation,
        /// Batches this phase will submit
        batches: usize,
    },
    /// A batch request is about to be sent
    BatchStarted {
        /// Phase operation
        operation: BatchOperation,
        /// Position of the batch within its phase, starting at 1
        batch_index: usize,
        /// Members in the batch
        member_count: usize,
    },
    /// A batch request finished, successfully or not
    BatchCompleted(BatchOutcome),
    /// Pausing before the next batch
    Pausing {
        /// Pause length
        delay: Duration,
    },
    /// A phase finished
    PhaseFinished {
        /// Phase operation
        operation: BatchOperation,
        /// Batches the service accepted
        succeeded: usize,
        /// Batches that failed
        failed: usize,
    },
    /// The run stopped between batches because cancellation was requested
    Cancelled {
        /// Phase that was running
        operation: BatchOperation,
        /// Batches of that phase already submitted
        completed_batches: usize,
    },
    /// Every batch of both phases was attempted
    SyncFinished {
        /// Batches the service accepted
        succeeded: usize,
        /// Batches that failed
        failed: usize,
    },
}
