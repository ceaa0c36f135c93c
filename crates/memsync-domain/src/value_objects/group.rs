//! Managed group snapshot
//!
//! A [`GroupQueryResult`] is produced by whatever queried the group
//! management service. It carries the group's current members together with
//! everything needed to mutate that group.

use crate::error::{Error, Result};
use crate::value_objects::member::MembershipSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Basic-auth credentials for the group management service
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Service account user name
    pub user: String,
    /// Service account secret
    pub secret: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new<U: Into<String>, S: Into<String>>(user: U, secret: S) -> Self {
        Self {
            user: user.into(),
            secret: secret.into(),
        }
    }

    /// Whether no user has been supplied
    pub fn is_empty(&self) -> bool {
        self.user.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Current state of a managed group, as reported by the group service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupQueryResult {
    /// Group name, used for logging
    #[serde(rename = "group")]
    pub group_identifier: String,
    /// URL of the group's membership endpoint
    #[serde(rename = "members_url")]
    pub endpoint_url: String,
    /// Credentials used for outbound mutation requests
    #[serde(default)]
    pub credentials: Credentials,
    /// Members currently in the group
    #[serde(rename = "members", default)]
    pub managed_members: MembershipSet,
}

impl GroupQueryResult {
    /// Create a group query result
    pub fn new<G: Into<String>, U: Into<String>>(
        group_identifier: G,
        endpoint_url: U,
        credentials: Credentials,
        managed_members: MembershipSet,
    ) -> Self {
        Self {
            group_identifier: group_identifier.into(),
            endpoint_url: endpoint_url.into(),
            credentials,
            managed_members,
        }
    }

    /// Members currently in the managed group
    pub fn managed_members(&self) -> &MembershipSet {
        &self.managed_members
    }

    /// Fill in credentials when none were supplied with the query result
    #[must_use]
    pub fn with_default_credentials(mut self, credentials: Credentials) -> Self {
        if self.credentials.is_empty() {
            self.credentials = credentials;
        }
        self
    }

    /// Check the fields a mutation request depends on
    pub fn validate(&self) -> Result<()> {
        if self.group_identifier.trim().is_empty() {
            return Err(Error::malformed_input("group_identifier"));
        }
        if self.endpoint_url.trim().is_empty() {
            return Err(Error::malformed_input("endpoint_url"));
        }
        if self.credentials.user.trim().is_empty() {
            return Err(Error::malformed_input("credentials.user"));
        }
        Ok(())
    }
}
