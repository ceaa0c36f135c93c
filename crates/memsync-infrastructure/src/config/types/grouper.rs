//! Grouper service configuration types

use memsync_domain::value_objects::Credentials;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouper service defaults
///
/// Credentials here are used when the group query result carries none.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct GrouperConfig {
    /// Service account user
    pub user: String,

    /// Service account password
    pub password: String,

    /// Overrides the default HTTP user agent
    pub user_agent: Option<String>,
}

impl GrouperConfig {
    /// Credentials built from the configured service account
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.user.clone(), self.password.clone())
    }
}

impl fmt::Debug for GrouperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrouperConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
