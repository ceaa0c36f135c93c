//! Component wiring
//!
//! Builds the reconciler with production providers from an [`AppConfig`].

use crate::config::AppConfig;
use crate::events::TracingEventSink;
use memsync_application::{BatchSynchronizer, MembershipReconciler};
use memsync_domain::error::Result;
use memsync_providers::grouper::GrouperMembershipProvider;
use memsync_providers::http::{HttpClientConfig, build_http_client};
use memsync_providers::pacing::TokioPacer;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Build the HTTP client settings for the Grouper service
pub fn http_client_config(config: &AppConfig) -> HttpClientConfig {
    let http = HttpClientConfig::with_timeout(Duration::from_secs(config.sync.batch_timeout_secs));
    match &config.grouper.user_agent {
        Some(user_agent) => http.with_user_agent(user_agent.clone()),
        None => http,
    }
}

/// Build a batch synchronizer backed by the Grouper web service
pub fn build_synchronizer(
    config: &AppConfig,
    cancellation: Option<CancellationToken>,
) -> Result<BatchSynchronizer> {
    let client = build_http_client(&http_client_config(config))?;
    let provider = Arc::new(GrouperMembershipProvider::new(client));
    let synchronizer = BatchSynchronizer::new(
        provider,
        Arc::new(TokioPacer::new()),
        TracingEventSink::new_shared(),
    );
    debug!("Batch synchronizer built");

    Ok(match cancellation {
        Some(token) => synchronizer.with_cancellation(token),
        None => synchronizer,
    })
}

/// Build the reconciler used by the command line entry point
pub fn build_reconciler(
    config: &AppConfig,
    cancellation: Option<CancellationToken>,
) -> Result<MembershipReconciler> {
    Ok(MembershipReconciler::new(build_synchronizer(
        config,
        cancellation,
    )?))
}
