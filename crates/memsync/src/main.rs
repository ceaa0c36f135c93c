//! memsync - Entry Point
//!
//! Binary entry point. Lives in the `memsync` facade crate next to the
//! library so the command line types stay testable.
//!
//! ## Modes
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **Dry run** | `memsync --members m.txt --group g.json` | Logs the delta, submits nothing |
//! | **Sync** | `memsync --members m.txt --group g.json --sync` | Submits drops, then adds |

use clap::Parser;
use memsync::cli::{Cli, run};

/// Main entry point
///
/// Fails only on configuration or input errors. Batch failures are logged
/// and do not change the exit status.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli).await?;
    Ok(())
}
