//! Delta computation between an authoritative and a managed membership set

use crate::value_objects::batch::BatchOperation;
use crate::value_objects::group::GroupQueryResult;
use crate::value_objects::member::MembershipSet;
use serde::Serialize;

/// Membership differences between an authoritative source and a managed group.
///
/// All three sets are computed once, when the value is built, and are
/// pairwise disjoint. A fresh comparison needs a fresh `DeltaResult`.
/// Serialized for reporting only; [`DeltaResult::new`] and
/// [`DeltaResult::between`] are the only ways to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeltaResult {
    common: MembershipSet,
    adds: MembershipSet,
    drops: MembershipSet,
}

impl DeltaResult {
    /// Compare the authoritative members against a managed group snapshot
    pub fn new(authoritative: &MembershipSet, group: &GroupQueryResult) -> Self {
        Self::between(authoritative, group.managed_members())
    }

    /// Compare two raw membership sets
    pub fn between(authoritative: &MembershipSet, managed: &MembershipSet) -> Self {
        Self {
            common: authoritative.intersection(managed),
            adds: authoritative.difference(managed),
            drops: managed.difference(authoritative),
        }
    }

    /// Members present in both sources
    pub fn common(&self) -> &MembershipSet {
        &self.common
    }

    /// Members to add to the managed group
    pub fn adds(&self) -> &MembershipSet {
        &self.adds
    }

    /// Members to drop from the managed group
    pub fn drops(&self) -> &MembershipSet {
        &self.drops
    }

    /// The change set handled by the given operation
    pub fn changes_for(&self, operation: BatchOperation) -> &MembershipSet {
        match operation {
            BatchOperation::Add => &self.adds,
            BatchOperation::Drop => &self.drops,
        }
    }

    /// Total adds plus drops
    pub fn total_changes(&self) -> usize {
        self.adds.len() + self.drops.len()
    }

    /// Whether the managed group already matches the authoritative source
    pub fn is_in_sync(&self) -> bool {
        self.adds.is_empty() && self.drops.is_empty()
    }
}
