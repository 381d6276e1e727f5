// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! POM version representation.
//!
//! A POM version is the dotted triple `MAJOR.MINOR.REVISION` followed by an
//! optional free-form qualifier behind a `-` separator, e.g. `1.2.3` or
//! `1.2.3-SNAPSHOT`. All four parts are kept textual. The capturing pattern
//! is the only validation performed, so leading zeros survive a round trip
//! untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

// INVARIANT: Pattern is valid, checked by unit tests.
static VERSION_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(-.*)?$").unwrap());

/// Decomposed POM version.
///
/// The qualifier holds the suffix _without_ its leading `-` separator, and
/// is the empty string when the version has no qualifier at all.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct PomVersion {
    /// Major version (API of different versions are not compatible).
    pub major: String,

    /// Minor version (API of different versions are backwards compatible).
    pub minor: String,

    /// Revision (same API, different sources, e.g. a bugfix).
    pub revision: String,

    /// Optional free-form suffix, e.g. "SNAPSHOT" or "beta".
    pub qualifier: String,
}

impl FromStr for PomVersion {
    type Err = VersionError;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let found = VERSION_SHAPE
            .captures(version)
            .ok_or_else(|| VersionError::UnrecognizedShape {
                version: version.to_string(),
            })?;

        Ok(Self {
            major: found[1].to_string(),
            minor: found[2].to_string(),
            revision: found[3].to_string(),
            // INVARIANT: Cut off the - separator.
            qualifier: found
                .get(4)
                .map(|qualifier| qualifier.as_str()[1..].to_string())
                .unwrap_or_default(),
        })
    }
}

impl Display for PomVersion {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        write!(fmt, "{}.{}.{}", self.major, self.minor, self.revision)?;
        if !self.qualifier.is_empty() {
            write!(fmt, "-{}", self.qualifier)?;
        }

        Ok(())
    }
}

/// Version parsing error types.
#[derive(Clone, Debug, thiserror::Error)]
pub enum VersionError {
    /// Input does not look like a dotted version triple.
    #[error("version {version:?} does not match MAJOR.MINOR.REVISION[-QUALIFIER]")]
    UnrecognizedShape { version: String },
}

/// Friendly result alias :3
pub type Result<T, E = VersionError> = std::result::Result<T, E>;
