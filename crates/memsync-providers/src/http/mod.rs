//! HTTP Client Configuration
//!
//! Settings and construction of the `reqwest::Client` shared by API-based
//! providers. The Grouper provider receives the built client through its
//! constructor.

pub mod provider;

pub use provider::{HttpClientConfig, build_http_client};
// Re-export HttpResponseUtils from utils for convenience
pub use crate::utils::HttpResponseUtils;
