//! Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`GroupMembershipProvider`] | Submits membership mutation batches |

/// Group membership mutation port
pub mod group_membership;

pub use group_membership::{GroupMembershipProvider, SharedGroupMembershipProvider};
