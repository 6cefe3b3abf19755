// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console log setup shared by the binaries.

use std::io::{IsTerminal, stderr};

use anyhow::{Context, Result};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter directive when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install a plain-text `tracing` subscriber writing to stderr, colored only
/// when stderr is a terminal.
///
/// `RUST_LOG` overrides the level (e.g. `debug`, `version_sync=trace`).
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(stderr().is_terminal())
        .with_writer(stderr)
        .finish()
        .try_init()
        .context("failed to install log subscriber")
}
