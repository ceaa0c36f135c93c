//! Application Layer - memsync
//!
//! Use cases that reconcile a managed group against its authoritative
//! source and push the resulting changes to the group service.
//!
//! ## Use Cases
//!
//! - [`BatchSynchronizer`]: safety gate, then drop and add phases submitted
//!   as paced, strictly sequential batches
//! - [`MembershipReconciler`]: computes the delta and optionally hands it to
//!   the synchronizer
//!
//! ## Dependencies
//!
//! This crate depends only on `memsync-domain` ports; providers and the
//! tracing sink are injected by `memsync-infrastructure`.

pub mod use_cases;

pub use use_cases::*;
