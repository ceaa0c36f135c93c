//! Provider-specific constants

/// Content type the Grouper web service expects for JSON bodies
pub const CONTENT_TYPE_GROUPER_JSON: &str = "text/x-json";

/// Provider name reported by the Grouper client
pub const GROUPER_PROVIDER_NAME: &str = "grouper";

/// Default timeout for the shared HTTP client, in seconds
pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 60;

/// Maximum idle connections kept per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 4;

/// Idle connection timeout, in seconds
pub const HTTP_IDLE_TIMEOUT_SECS: u64 = 90;

/// Characters of a response body included in error messages
pub const ERROR_BODY_SNIPPET_LEN: usize = 200;
