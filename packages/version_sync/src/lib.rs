// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep the `version` field of `package.json` equal to the canonical version
//! stored in a plain-text `VERSION` file.
//!
//! Two modes are offered by [`VersionSynchronizer`]:
//!
//! - strict ([`VersionSynchronizer::sync`]): the version must be `X.Y.Z`, and the
//!   manifest is only rewritten when it differs;
//! - unconditional ([`VersionSynchronizer::update_package_version`]): whatever the
//!   `VERSION` file holds is written, every time.
//!
//! [`VersionSynchronizer::run`] picks one of them from the `strict` flag of [`SyncConfig`].

use std::fs::read_to_string;

use tracing::{error, info};

mod config;
mod error;
mod logging;
mod manifest;
mod version;

pub use config::{MANIFEST_FILE, SyncConfig, VERSION_FILE};
pub use error::{ErrorKind, Result, SyncError};
pub use logging::init_logging;
pub use manifest::Manifest;
pub use version::{Version, is_release_triplet};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// What a synchronization run did to the manifest.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The manifest was rewritten.
    Updated,
    /// The manifest already carried the canonical version; nothing was written.
    AlreadySynced,
}

/// Result of [`VersionSynchronizer::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Version now recorded in the manifest.
    pub version: String,
    /// Whether the manifest was written.
    pub outcome: SyncOutcome,
}

/// Read-only view of both versions, see [`VersionSynchronizer::compare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Trimmed `VERSION` file content.
    pub canonical: String,
    /// The manifest `version` field, `None` when absent or not a string.
    pub manifest: Option<String>,
}

impl Comparison {
    /// Exact equality; the manifest side is not trimmed.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.manifest.as_deref() == Some(self.canonical.as_str())
    }
}

/// Keeps a manifest version in agreement with a `VERSION` file.
///
/// Both files are read fresh on every call.
#[derive(Debug, Clone, Default)]
pub struct VersionSynchronizer {
    config: SyncConfig,
}

impl VersionSynchronizer {
    /// Create a synchronizer over the files named in `config`.
    #[must_use]
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Content of the `VERSION` file with surrounding whitespace removed.
    ///
    /// A byte-order mark counts as whitespace. The result is not validated.
    pub fn read_canonical_version(&self) -> Result<String> {
        let path = &self.config.version_file;
        let content = read_to_string(path).map_err(|source| SyncError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(content
            .trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
            .to_owned())
    }

    /// Run the mode selected by the `strict` flag of the configuration.
    pub fn run(&self) -> Result<SyncReport> {
        if self.config.strict {
            let (version, outcome) = self.sync_strict()?;
            Ok(SyncReport {
                version: version.into(),
                outcome,
            })
        } else {
            Ok(SyncReport {
                version: self.update_package_version()?,
                outcome: SyncOutcome::Updated,
            })
        }
    }

    /// Validate the canonical version and write it to the manifest if it differs.
    ///
    /// Fails on a blank or malformed `VERSION` file without touching the manifest.
    /// Calling this twice in a row writes at most once.
    pub fn sync(&self) -> Result<Version> {
        self.sync_strict().map(|(version, _)| version)
    }

    fn sync_strict(&self) -> Result<(Version, SyncOutcome)> {
        let raw = self.read_canonical_version()?;
        if raw.is_empty() {
            return Err(SyncError::EmptyVersion {
                path: self.config.version_file.clone(),
            });
        }
        let Some(version) = Version::parse(&raw) else {
            return Err(SyncError::InvalidFormat { version: raw });
        };

        let mut manifest = Manifest::load(&self.config.manifest_file)?;
        if manifest.version() == Some(version.as_str()) {
            info!(%version, "version already synced");
            return Ok((version, SyncOutcome::AlreadySynced));
        }

        manifest.set_version(version.as_str());
        manifest.save()?;
        info!(%version, path = %manifest.path().display(), "updated package.json version");
        Ok((version, SyncOutcome::Updated))
    }

    /// Write the trimmed `VERSION` content to the manifest unconditionally.
    ///
    /// No emptiness or format check is made and the write happens even when the
    /// manifest already matches.
    pub fn update_package_version(&self) -> Result<String> {
        let version = self.read_canonical_version()?;
        let mut manifest = Manifest::load(&self.config.manifest_file)?;
        manifest.set_version(&version);
        manifest.save()?;
        info!(%version, path = %manifest.path().display(), "updated package.json version");
        Ok(version)
    }

    /// Read both versions without modifying anything, propagating read and
    /// parse failures.
    pub fn compare(&self) -> Result<Comparison> {
        let canonical = self.read_canonical_version()?;
        let manifest = Manifest::load(&self.config.manifest_file)?;
        Ok(Comparison {
            canonical,
            manifest: manifest.version().map(str::to_owned),
        })
    }

    /// `true` when the manifest version equals the trimmed `VERSION` content.
    ///
    /// Never writes. Mismatches and read or parse failures are logged and
    /// reported as `false`.
    #[must_use]
    pub fn validate(&self) -> bool {
        match self.compare() {
            Ok(comparison) if comparison.is_synced() => {
                info!(version = %comparison.canonical, "version sync validated");
                true
            }
            Ok(comparison) => {
                error!(
                    version_file = %comparison.canonical,
                    package_json = comparison.manifest.as_deref().unwrap_or("<missing>"),
                    "version mismatch"
                );
                false
            }
            Err(err) => {
                error!("error validating sync: {err}");
                false
            }
        }
    }
}
