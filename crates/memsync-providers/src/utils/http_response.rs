//! HTTP Response Utilities
//!
//! Helpers for turning Grouper web service responses into result codes.
//! Grouper embeds its verdict in the body, and failed mutations often come
//! back with a non-2xx status *and* a result code, so the body is inspected
//! before the status.

use crate::constants::ERROR_BODY_SNIPPET_LEN;
use memsync_domain::error::{Error, Result};
use memsync_domain::value_objects::BatchOperation;
use reqwest::Response;
use serde_json::Value;

/// Format error message for a provider
fn provider_error(provider: &str, context: &str, details: &str) -> Error {
    Error::network(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Read the result code for `operation` from a response
    ///
    /// # Arguments
    /// * `response` - The HTTP response to inspect
    /// * `operation` - Operation the request performed; selects the results envelope
    /// * `provider_name` - Name of the provider for error messages
    pub async fn extract_result_code(
        response: Response,
        operation: BatchOperation,
        provider_name: &str,
    ) -> Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::network_with_source(format!("{provider_name} response read failed"), e)
        })?;

        let parsed = serde_json::from_str::<Value>(&body).ok();
        if let Some(code) = parsed
            .as_ref()
            .and_then(|value| Self::result_code(value, operation))
        {
            return Ok(code.to_string());
        }

        if !status.is_success() {
            let snippet = Self::snippet(&body);
            let code = status.as_u16();
            return Err(match code {
                401 | 403 => provider_error(provider_name, "authentication failed", &snippet),
                429 => provider_error(provider_name, "rate limit exceeded", &snippet),
                500..=599 => {
                    provider_error(provider_name, &format!("server error ({code})"), &snippet)
                }
                _ => provider_error(provider_name, &format!("request failed ({code})"), &snippet),
            });
        }

        Err(Error::malformed_response(format!(
            "{provider_name} response has no {}.resultMetadata.resultCode",
            operation.results_key()
        )))
    }

    /// Locate `<results key>.resultMetadata.resultCode` in a response body
    pub fn result_code(body: &Value, operation: BatchOperation) -> Option<&str> {
        body.get(operation.results_key())?
            .get("resultMetadata")?
            .get("resultCode")?
            .as_str()
    }

    fn snippet(body: &str) -> String {
        if body.is_empty() {
            return "empty body".to_string();
        }
        body.chars().take(ERROR_BODY_SNIPPET_LEN).collect()
    }
}
