//! Domain Value Objects
//!
//! Immutable values describing group membership and the work needed to
//! bring a managed group in line with its authoritative source.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`MemberId`] | Opaque member identifier shared by both sources |
//! | [`MembershipSet`] | Ordered set of member ids |
//! | [`GroupQueryResult`] | Managed group snapshot with endpoint and credentials |
//! | [`DeltaResult`] | `common`, `adds` and `drops` derived from two sets |
//! | [`BatchConfig`] | Batch size, timeout, delay and safety threshold |
//! | [`BatchOutcome`] | Result of one submitted batch |
//! | [`SyncReport`] | Summary of one synchronization run |

/// Batch configuration and outcomes
pub mod batch;
/// Delta computation between two membership sets
pub mod delta;
/// Managed group snapshot
pub mod group;
/// Member identifiers and sets
pub mod member;

pub use batch::{BatchConfig, BatchOperation, BatchOutcome, BatchResult, SyncReport, SyncStatus};
pub use delta::DeltaResult;
pub use group::{Credentials, GroupQueryResult};
pub use member::{MemberId, MembershipSet};
