//! # memsync
//!
//! Keeps a Grouper group's membership in line with an authoritative member
//! list. The delta between the two is computed locally and pushed to the
//! Grouper web service as paced batches: removals first, then additions.
//! A safety threshold refuses runs whose delta is suspiciously large.
//!
//! ## Example
//!
//! ```ignore
//! use memsync::domain::value_objects::{DeltaResult, MembershipSet};
//!
//! let authoritative: MembershipSet = ["A", "B", "C"].into_iter().collect();
//! let managed: MembershipSet = ["B", "C", "D"].into_iter().collect();
//! let delta = DeltaResult::between(&authoritative, &managed);
//! assert_eq!(delta.adds().len(), 1);
//! assert_eq!(delta.drops().len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, events, errors and port traits
//! - `application` - Reconciliation and batch synchronization use cases
//! - `providers` - Grouper client and pacer implementations
//! - `infrastructure` - Configuration, logging, input loading and wiring

/// Domain layer - value objects, events, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use memsync_domain::*;
}

/// Application layer - use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use memsync_application::*;
}

/// Provider layer - port implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use memsync_providers::*;
}

/// Infrastructure layer - config, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use memsync_infrastructure::*;
}

/// Command line interface
pub mod cli;

pub use memsync_application::{MembershipReconciler, ReconciliationReport, SyncMode};
pub use memsync_domain::{Error, Result};
