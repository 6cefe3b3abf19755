// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical release version as recorded in the `VERSION` file.

use core::fmt;

/// Release version in `X.Y.Z` form, kept exactly as it was written.
///
/// No normalization happens: `"01.2.3"` stays `"01.2.3"`, and components are
/// never range checked, so arbitrarily long digit runs are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Parse version in "X.Y.Z" format from string slice.
    ///
    /// The whole string must match; surrounding whitespace is rejected.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        is_release_triplet(s).then(|| Self(s.to_owned()))
    }

    /// Version text as read from the source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.0
    }
}

/// Check that `s` is three non-empty runs of ASCII digits separated by dots.
#[must_use]
pub const fn is_release_triplet(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut offset = 0;
    let mut segment = 0usize;
    let mut digits = 0usize;

    while offset < bytes.len() {
        if bytes[offset] == b'.' {
            if digits == 0 || segment == 2 {
                return false;
            }
            segment += 1;
            digits = 0;
        } else if bytes[offset].is_ascii_digit() {
            digits += 1;
        } else {
            return false;
        }
        offset += 1;
    }

    segment == 2 && digits > 0
}
