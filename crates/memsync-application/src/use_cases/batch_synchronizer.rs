//! Batch Synchronizer Use Case
//!
//! Pushes a [`DeltaResult`] to the group service. A run either stops at the
//! safety gate or walks the drop phase and then the add phase, one batch at
//! a time. A failed batch is recorded and the run moves on.

use memsync_domain::constants::RESULT_CODE_SUCCESS;
use memsync_domain::error::{Error, Result};
use memsync_domain::events::SyncEvent;
use memsync_domain::ports::{SharedEventSink, SharedGroupMembershipProvider, SharedPacer};
use memsync_domain::value_objects::{
    BatchConfig, BatchOperation, BatchOutcome, BatchResult, DeltaResult, GroupQueryResult,
    MemberId, SyncReport, SyncStatus,
};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// How a phase ended
enum PhaseEnd {
    Completed,
    Cancelled,
}

/// Tally of batch results within one phase
#[derive(Default)]
struct PhaseTally {
    succeeded: usize,
    failed: usize,
}

impl PhaseTally {
    fn record(&mut self, result: &BatchResult) {
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Submits membership changes as paced, sequential batches
pub struct BatchSynchronizer {
    provider: SharedGroupMembershipProvider,
    pacer: SharedPacer,
    events: SharedEventSink,
    cancellation: Option<CancellationToken>,
}

impl BatchSynchronizer {
    /// Create a synchronizer with injected ports
    pub fn new(
        provider: SharedGroupMembershipProvider,
        pacer: SharedPacer,
        events: SharedEventSink,
    ) -> Self {
        Self {
            provider,
            pacer,
            events,
            cancellation: None,
        }
    }

    /// Stop between batches once `token` is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Sink receiving this synchronizer's events
    pub fn events(&self) -> &SharedEventSink {
        &self.events
    }

    /// Synchronize the managed group with the delta.
    ///
    /// Returns `Err` only when `target` is malformed; that check happens
    /// before any remote call. Everything else is reported through events
    /// and the returned [`SyncReport`].
    pub async fn synchronize(
        &self,
        delta: &DeltaResult,
        config: &BatchConfig,
        target: &GroupQueryResult,
    ) -> Result<SyncReport> {
        target.validate()?;

        let total_delta = delta.total_changes();
        if config.exceeds_sync_max(total_delta) {
            self.events.emit(&SyncEvent::ThresholdExceeded {
                total_delta,
                sync_max: config.sync_max(),
            });
            return Ok(SyncReport::aborted(total_delta, config.sync_max()));
        }

        self.events.emit(&SyncEvent::SyncStarted {
            group: target.group_identifier.clone(),
            batch_size: config.batch_size(),
            batch_timeout: config.batch_timeout(),
            batch_delay: config.batch_delay(),
        });

        let mut outcomes = Vec::with_capacity(
            config.batch_count(delta.adds().len()) + config.batch_count(delta.drops().len()),
        );

        for operation in BatchOperation::PHASE_ORDER {
            let members = delta.changes_for(operation).to_vec();
            let end = self
                .run_phase(operation, &members, config, target, &mut outcomes)
                .await;
            if let PhaseEnd::Cancelled = end {
                return Ok(SyncReport {
                    status: SyncStatus::Cancelled,
                    outcomes,
                });
            }
        }

        let report = SyncReport {
            status: SyncStatus::Completed,
            outcomes,
        };
        self.events.emit(&SyncEvent::SyncFinished {
            succeeded: report.succeeded(),
            failed: report.failures().count(),
        });
        Ok(report)
    }

    async fn run_phase(
        &self,
        operation: BatchOperation,
        members: &[MemberId],
        config: &BatchConfig,
        target: &GroupQueryResult,
        outcomes: &mut Vec<BatchOutcome>,
    ) -> PhaseEnd {
        self.events.emit(&SyncEvent::PhaseStarted {
            operation,
            batches: config.batch_count(members.len()),
        });

        let mut tally = PhaseTally::default();
        for (position, batch) in members.chunks(config.batch_size()).enumerate() {
            if self.is_cancelled() {
                self.events.emit(&SyncEvent::Cancelled {
                    operation,
                    completed_batches: position,
                });
                return PhaseEnd::Cancelled;
            }

            let outcome = self
                .submit_batch(operation, position + 1, batch, config, target)
                .await;
            tally.record(&outcome.result);
            self.events.emit(&SyncEvent::BatchCompleted(outcome.clone()));
            outcomes.push(outcome);

            if !config.batch_delay().is_zero() {
                self.events.emit(&SyncEvent::Pausing {
                    delay: config.batch_delay(),
                });
                self.pacer.pause(config.batch_delay()).await;
            }
        }

        self.events.emit(&SyncEvent::PhaseFinished {
            operation,
            succeeded: tally.succeeded,
            failed: tally.failed,
        });
        PhaseEnd::Completed
    }

    async fn submit_batch(
        &self,
        operation: BatchOperation,
        batch_index: usize,
        batch: &[MemberId],
        config: &BatchConfig,
        target: &GroupQueryResult,
    ) -> BatchOutcome {
        self.events.emit(&SyncEvent::BatchStarted {
            operation,
            batch_index,
            member_count: batch.len(),
        });

        let timeout = config.batch_timeout();
        let started = Instant::now();
        let response = tokio::time::timeout(
            timeout,
            self.provider.submit_batch(operation, batch, target, timeout),
        )
        .await
        .unwrap_or_else(|_| Err(Error::timeout(timeout)));
        let duration_seconds = started.elapsed().as_secs_f64();

        let result = match response {
            Ok(code) if code == RESULT_CODE_SUCCESS => BatchResult::Success,
            Ok(code) => BatchResult::Failure(code),
            Err(e) => {
                debug!(
                    provider = self.provider.provider_name(),
                    error = %e,
                    "Batch request failed"
                );
                BatchResult::Failure(e.to_string())
            }
        };

        BatchOutcome {
            operation,
            batch_index,
            member_count: batch.len(),
            duration_seconds,
            result,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
