//! Command line interface
//!
//! Parses arguments, layers them over the loaded configuration and runs one
//! reconciliation.

use clap::Parser;
use memsync_application::{ReconciliationReport, SyncMode};
use memsync_domain::error::Result;
use memsync_infrastructure::bootstrap::build_reconciler;
use memsync_infrastructure::config::loader::validate_app_config;
use memsync_infrastructure::config::{AppConfig, ConfigLoader};
use memsync_infrastructure::inputs::{load_group_query, load_members};
use memsync_infrastructure::logging::init_logging;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Command line interface for memsync
#[derive(Parser, Debug, Clone)]
#[command(name = "memsync")]
#[command(about = "Reconcile an authoritative member list with a Grouper group")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Authoritative members: JSON array or one identifier per line
    #[arg(short, long)]
    pub members: PathBuf,

    /// Group query result as JSON (group, members_url, members, credentials)
    #[arg(short, long)]
    pub group: PathBuf,

    /// Submit changes to Grouper; without this flag the run is a dry run
    #[arg(long)]
    pub sync: bool,

    /// Largest total delta that may be synchronized
    #[arg(long)]
    pub sync_max: Option<usize>,

    /// Maximum members per request
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Pause after each batch, in seconds
    #[arg(long)]
    pub batch_delay: Option<u64>,
}

impl Cli {
    /// Layer command line overrides over the loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(sync_max) = self.sync_max {
            config.sync.sync_max = sync_max;
        }
        if let Some(batch_size) = self.batch_size {
            config.sync.batch_size = batch_size;
        }
        if let Some(batch_delay) = self.batch_delay {
            config.sync.batch_delay_secs = batch_delay;
        }
    }

    /// Requested run mode
    pub fn mode(&self) -> SyncMode {
        if self.sync {
            SyncMode::Apply
        } else {
            SyncMode::DryRun
        }
    }

    /// Load configuration from file and environment, then apply overrides
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load()?;
        self.apply_overrides(&mut config);
        validate_app_config(&config)?;
        Ok(config)
    }
}

/// Run the command: load configuration, start logging, reconcile
pub async fn run(cli: Cli) -> Result<ReconciliationReport> {
    let config = cli.resolve_config()?;
    init_logging(&config.logging)?;
    execute(&cli, &config).await
}

/// Reconcile with an already resolved configuration
///
/// Ctrl-C lets the batch in flight finish and stops before the next one.
pub async fn execute(cli: &Cli, config: &AppConfig) -> Result<ReconciliationReport> {
    let batch_config = config.sync.to_batch_config()?;
    let authoritative = load_members(&cli.members)?;
    let target =
        load_group_query(&cli.group)?.with_default_credentials(config.grouper.credentials());

    let token = CancellationToken::new();
    let interrupt = tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping after the current batch");
                token.cancel();
            }
        }
    });

    let mode = cli.mode();
    if mode == SyncMode::DryRun {
        info!("Dry run: pass --sync to submit changes");
    }

    let reconciler = build_reconciler(config, Some(token))?;
    let report = reconciler
        .reconcile(&authoritative, &target, &batch_config, mode)
        .await;
    interrupt.abort();
    report
}
