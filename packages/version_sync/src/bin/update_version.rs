// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone binary to overwrite package.json version from the VERSION file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use version_sync::{SyncConfig, VersionSynchronizer, init_logging};

/// Write the VERSION file content into package.json, unvalidated.
#[derive(Parser, Debug)]
#[command(name = "update_version", version)]
struct Cli {
    /// Project directory holding VERSION and package.json.
    #[arg(long, env = "VERSION_SYNC_ROOT", default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging()?;

    let config = SyncConfig::from_root(&cli.root).strict(false);
    match VersionSynchronizer::new(config).run() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!("error updating package.json: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
