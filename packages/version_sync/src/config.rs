// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locations of the files kept in agreement and the synchronization mode.

use std::path::{Path, PathBuf};

/// Name of the plain-text file holding the canonical version.
pub const VERSION_FILE: &str = "VERSION";

/// Name of the JSON manifest whose `version` field tracks [`VERSION_FILE`].
pub const MANIFEST_FILE: &str = "package.json";

/// Configuration of a [`crate::VersionSynchronizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Path of the `VERSION` file.
    pub version_file: PathBuf,
    /// Path of the `package.json` manifest.
    pub manifest_file: PathBuf,
    /// `true`: validate the version and skip the write when already in sync.
    /// `false`: always overwrite, no validation.
    pub strict: bool,
}

impl Default for SyncConfig {
    /// Both files relative to the current directory, strict mode.
    fn default() -> Self {
        Self {
            version_file: PathBuf::from(VERSION_FILE),
            manifest_file: PathBuf::from(MANIFEST_FILE),
            strict: true,
        }
    }
}

impl SyncConfig {
    /// Resolve both files inside the project directory `root`.
    #[must_use]
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            version_file: root.join(VERSION_FILE),
            manifest_file: root.join(MANIFEST_FILE),
            ..Self::default()
        }
    }

    /// Switch between the strict and the unconditional mode.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
