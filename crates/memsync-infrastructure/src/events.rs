//! Tracing-backed synchronization event sink
//!
//! Turns [`SyncEvent`]s into log lines. Refusals, failed batches and
//! cancellation are warnings; per-batch start notices are debug output.

use memsync_domain::events::SyncEvent;
use memsync_domain::ports::{SharedEventSink, SyncEventSink};
use memsync_domain::value_objects::BatchResult;
use std::sync::Arc;
use tracing::{Level, debug, info, warn};

/// Event sink that writes every event to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl TracingEventSink {
    /// Create a new tracing event sink
    pub fn new() -> Self {
        Self
    }

    /// Create as `Arc` for sharing
    pub fn new_shared() -> SharedEventSink {
        Arc::new(Self::new())
    }
}

impl SyncEventSink for TracingEventSink {
    fn emit(&self, event: &SyncEvent) {
        let (level, message) = render(event);
        if level == Level::WARN {
            warn!(target: "memsync::sync", "{message}");
        } else if level == Level::DEBUG {
            debug!(target: "memsync::sync", "{message}");
        } else {
            info!(target: "memsync::sync", "{message}");
        }
    }
}

/// Log level and message for an event
pub fn render(event: &SyncEvent) -> (Level, String) {
    match event {
        SyncEvent::DeltaComputed {
            group,
            common,
            adds,
            drops,
        } => (
            Level::INFO,
            format!(
                "Membership delta for {group}: {common} in common, {adds} to add, {drops} to drop"
            ),
        ),
        SyncEvent::ThresholdExceeded {
            total_delta,
            sync_max,
        } => (
            Level::WARN,
            format!(
                "Total delta ({total_delta}) exceeds maximum sync limit ({sync_max}), will not synchronize"
            ),
        ),
        SyncEvent::SyncStarted {
            group,
            batch_size,
            batch_timeout,
            batch_delay,
        } => (
            Level::INFO,
            format!(
                "Synchronizing {group}: batch size {batch_size}, timeout {batch_timeout:?}, delay {batch_delay:?}"
            ),
        ),
        SyncEvent::PhaseStarted { operation, batches } => (
            Level::INFO,
            format!("Starting {operation} phase with {batches} batches"),
        ),
        SyncEvent::BatchStarted {
            operation,
            batch_index,
            member_count,
        } => (
            Level::DEBUG,
            format!("Submitting {operation} batch {batch_index} ({member_count} entries)"),
        ),
        SyncEvent::BatchCompleted(outcome) => match &outcome.result {
            BatchResult::Success => (
                Level::INFO,
                format!(
                    "{} batch {}, {} entries, {:.3} seconds",
                    outcome.operation.past_tense(),
                    outcome.batch_index,
                    outcome.member_count,
                    outcome.duration_seconds
                ),
            ),
            BatchResult::Failure(reason) => (
                Level::WARN,
                format!(
                    "Problem running {} batch {}, result code = {}",
                    outcome.operation, outcome.batch_index, reason
                ),
            ),
        },
        SyncEvent::Pausing { delay } => (Level::INFO, format!("Pausing for {delay:?}")),
        SyncEvent::PhaseFinished {
            operation,
            succeeded,
            failed,
        } => (
            Level::INFO,
            format!("Finished {operation} phase: {succeeded} batches succeeded, {failed} failed"),
        ),
        SyncEvent::Cancelled {
            operation,
            completed_batches,
        } => (
            Level::WARN,
            format!(
                "Synchronization cancelled during {operation} phase after {completed_batches} batches"
            ),
        ),
        SyncEvent::SyncFinished { succeeded, failed } => (
            Level::INFO,
            format!("Synchronization finished: {succeeded} batches succeeded, {failed} failed"),
        ),
    }
}
