//! Grouper REST client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use memsync_domain::error::{Error, Result};
use memsync_domain::ports::GroupMembershipProvider;
use memsync_domain::value_objects::{BatchOperation, GroupQueryResult, MemberId};

use crate::constants::{CONTENT_TYPE_GROUPER_JSON, GROUPER_PROVIDER_NAME};
use crate::grouper::protocol::{http_method, request_body};
use crate::utils::HttpResponseUtils;

/// Grouper membership provider
///
/// Receives its HTTP client via constructor injection. Endpoint and
/// credentials come from the [`GroupQueryResult`] of each call.
///
/// ## Example
///
/// ```rust,no_run
/// use memsync_providers::grouper::GrouperMembershipProvider;
/// use reqwest::Client;
///
/// let provider = GrouperMembershipProvider::new(Client::new());
/// ```
#[derive(Debug, Clone)]
pub struct GrouperMembershipProvider {
    http_client: Client,
}

impl GrouperMembershipProvider {
    /// Create a new Grouper provider
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl GroupMembershipProvider for GrouperMembershipProvider {
    async fn submit_batch(
        &self,
        operation: BatchOperation,
        members: &[MemberId],
        target: &GroupQueryResult,
        timeout: Duration,
    ) -> Result<String> {
        let body = serde_json::to_string(&request_body(operation, members)?)?;

        debug!(
            group = %target.group_identifier,
            operation = %operation,
            members = members.len(),
            "Submitting Grouper batch"
        );

        let response = self
            .http_client
            .request(http_method(operation), &target.endpoint_url)
            .basic_auth(&target.credentials.user, Some(&target.credentials.secret))
            .header(CONTENT_TYPE, CONTENT_TYPE_GROUPER_JSON)
            .timeout(timeout)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(timeout)
                } else {
                    let message = format!("{GROUPER_PROVIDER_NAME} request failed: {e}");
                    Error::network_with_source(message, e)
                }
            })?;

        HttpResponseUtils::extract_result_code(response, operation, GROUPER_PROVIDER_NAME).await
    }

    fn provider_name(&self) -> &str {
        GROUPER_PROVIDER_NAME
    }
}
