//! Member identifiers and membership sets

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Opaque identifier of a member principal.
///
/// Compared by exact string equality; no case folding or trimming.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Create a member id from any string-like value
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MemberId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Set of member ids.
///
/// Backed by an ordered set so iteration (and therefore batch partitioning)
/// is deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipSet(BTreeSet<MemberId>);

impl MembershipSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a member, returning `false` if it was already present
    pub fn insert(&mut self, member: MemberId) -> bool {
        self.0.insert(member)
    }

    /// Whether the set contains the given id
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate members in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &MemberId> {
        self.0.iter()
    }

    /// Members present in both sets
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Members present in `self` but not in `other`
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Members present in either set
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Whether the two sets share no member
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Copy the members into a vector, in iteration order
    pub fn to_vec(&self) -> Vec<MemberId> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<MemberId> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = MemberId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(MemberId::from).collect())
    }
}

impl IntoIterator for MembershipSet {
    type Item = MemberId;
    type IntoIter = std::collections::btree_set::IntoIter<MemberId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MembershipSet {
    type Item = &'a MemberId;
    type IntoIter = std::collections::btree_set::Iter<'a, MemberId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
