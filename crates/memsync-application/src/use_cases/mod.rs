//! Use case implementations

/// Batch synchronization use case
pub mod batch_synchronizer;
/// Reconciliation use case
pub mod reconciliation;

pub use batch_synchronizer::BatchSynchronizer;
pub use reconciliation::{MembershipReconciler, ReconciliationReport, SyncMode};
