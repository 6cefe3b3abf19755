// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep package.json version equal to the VERSION file, or check that it is.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use version_sync::{SyncConfig, VersionSynchronizer, init_logging};

/// Synchronize the package.json version with the VERSION file.
#[derive(Parser, Debug)]
#[command(name = "sync_version", version)]
struct Cli {
    /// Project directory holding VERSION and package.json.
    #[arg(long, env = "VERSION_SYNC_ROOT", default_value = ".")]
    root: PathBuf,

    /// `sync` (default), `validate` or `check`. Anything else runs `sync`.
    #[arg(
        value_name = "COMMAND",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Validate VERSION and update package.json if it differs.
    Sync,
    /// Fail unless package.json already matches VERSION.
    Validate,
    /// Report whether package.json matches VERSION without failing.
    Check,
}

impl Command {
    fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("validate") => Self::Validate,
            Some("check") => Self::Check,
            _ => Self::Sync,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging()?;

    let synchronizer = VersionSynchronizer::new(SyncConfig::from_root(&cli.root));
    let code = match Command::from_arg(cli.args.first().map(String::as_str)) {
        Command::Sync => match synchronizer.sync() {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!("error syncing version: {err}");
                ExitCode::FAILURE
            }
        },
        Command::Validate => {
            if synchronizer.validate() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        // Soft check: the outcome is logged, never turned into a failure
        Command::Check => {
            let _ = synchronizer.validate();
            ExitCode::SUCCESS
        }
    };
    Ok(code)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_from_arg_test() {
        assert_eq!(Command::Sync, Command::from_arg(None));
        assert_eq!(Command::Sync, Command::from_arg(Some("sync")));
        assert_eq!(Command::Validate, Command::from_arg(Some("validate")));
        assert_eq!(Command::Check, Command::from_arg(Some("check")));
        assert_eq!(Command::Sync, Command::from_arg(Some("bump")));
        assert_eq!(Command::Sync, Command::from_arg(Some("--help-me")));
    }

    #[test]
    fn unknown_arguments_are_accepted_test() -> Result<()> {
        let cli = Cli::try_parse_from(["sync_version", "--root", "proj", "--help-me", "x"])?;
        assert_eq!(PathBuf::from("proj"), cli.root);
        assert_eq!(vec!["--help-me".to_owned(), "x".to_owned()], cli.args);
        Ok(())
    }
}
