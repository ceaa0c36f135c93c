//! Group Membership Provider Port
//!
//! Contract for the remote service that owns the managed group. One call
//! submits one batch; the implementation reports the service's result code
//! and leaves the success decision to the caller.

use crate::error::Result;
use crate::value_objects::{BatchOperation, GroupQueryResult, MemberId};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Submits membership mutation batches to a group management service
///
/// # Example
///
/// ```rust,no_run
/// use memsync_domain::ports::providers::GroupMembershipProvider;
/// use memsync_domain::value_objects::{BatchOperation, GroupQueryResult, MemberId};
/// use std::time::Duration;
///
/// async fn add_one(
///     provider: &dyn GroupMembershipProvider,
///     group: &GroupQueryResult,
/// ) -> memsync_domain::Result<String> {
///     let members = vec![MemberId::new("jdoe")];
///     provider
///         .submit_batch(BatchOperation::Add, &members, group, Duration::from_secs(60))
///         .await
/// }
/// ```
#[async_trait]
pub trait GroupMembershipProvider: Send + Sync {
    /// Submit one batch and return the result code embedded in the response
    ///
    /// Transport failures, timeouts and responses without a result code are
    /// returned as errors.
    async fn submit_batch(
        &self,
        operation: BatchOperation,
        members: &[MemberId],
        target: &GroupQueryResult,
        timeout: Duration,
    ) -> Result<String>;

    /// Get the name of this provider
    fn provider_name(&self) -> &str;
}

/// Shared group membership provider for dependency injection
pub type SharedGroupMembershipProvider = Arc<dyn GroupMembershipProvider>;
