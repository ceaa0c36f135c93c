//! Reconciliation Use Case
//!
//! Compares the authoritative members with the managed group and, when asked
//! to, synchronizes the group.

use crate::use_cases::batch_synchronizer::BatchSynchronizer;
use memsync_domain::error::Result;
use memsync_domain::events::SyncEvent;
use memsync_domain::value_objects::{
    BatchConfig, DeltaResult, GroupQueryResult, MembershipSet, SyncReport,
};

/// Whether a reconciliation run may mutate the managed group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// Compute and report the delta only
    #[default]
    DryRun,
    /// Submit the delta to the group service
    Apply,
}

/// Result of a reconciliation run
#[derive(Debug, Clone)]
pub struct ReconciliationReport {
    /// Computed differences
    pub delta: DeltaResult,
    /// Synchronization summary; `None` for dry runs
    pub sync: Option<SyncReport>,
}

/// Reconciliation service - delta computation followed by synchronization
pub struct MembershipReconciler {
    synchronizer: BatchSynchronizer,
}

impl MembershipReconciler {
    /// Create a reconciler around a synchronizer
    pub fn new(synchronizer: BatchSynchronizer) -> Self {
        Self { synchronizer }
    }

    /// Reconcile `target` against `authoritative`
    pub async fn reconcile(
        &self,
        authoritative: &MembershipSet,
        target: &GroupQueryResult,
        config: &BatchConfig,
        mode: SyncMode,
    ) -> Result<ReconciliationReport> {
        let delta = DeltaResult::new(authoritative, target);
        self.synchronizer.events().emit(&SyncEvent::DeltaComputed {
            group: target.group_identifier.clone(),
            common: delta.common().len(),
            adds: delta.adds().len(),
            drops: delta.drops().len(),
        });

        let sync = match mode {
            SyncMode::DryRun => None,
            SyncMode::Apply => Some(self.synchronizer.synchronize(&delta, config, target).await?),
        };

        Ok(ReconciliationReport { delta, sync })
    }
}
