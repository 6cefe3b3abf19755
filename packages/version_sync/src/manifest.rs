// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `package.json` handling.
//!
//! This implementation uses `serde_json` with the `preserve_order` feature so
//! that rewriting the manifest keeps every entry where it was and only the
//! formatting is normalized (standard 2-space indentation).

use std::fs::{read_to_string, write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, SyncError};

const VERSION_KEY: &str = "version";

/// A parsed JSON manifest bound to the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = read_to_string(&path).map_err(|source| SyncError::Read {
            path: path.clone(),
            source,
        })?;

        let json: Value = serde_json::from_str(&content).map_err(|source| SyncError::Parse {
            path: path.clone(),
            source,
        })?;

        match json {
            Value::Object(fields) => Ok(Self { path, fields }),
            _ => Err(SyncError::NotAnObject { path }),
        }
    }

    /// File this manifest is read from and written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `version` field, if present and a string.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.fields.get(VERSION_KEY).and_then(Value::as_str)
    }

    /// Replace the `version` field, keeping its position in the object.
    pub fn set_version(&mut self, version: &str) {
        self.fields
            .insert(VERSION_KEY.to_owned(), Value::String(version.to_owned()));
    }

    /// Render the manifest as pretty JSON followed by a single newline.
    pub fn to_json(&self) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(&self.fields).map_err(|source| SyncError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        content.push('\n');
        Ok(content)
    }

    /// Overwrite the manifest file with the current contents.
    pub fn save(&self) -> Result<()> {
        let content = self.to_json()?;
        write(&self.path, content).map_err(|source| SyncError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
