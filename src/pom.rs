// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! POM property rewriting.
//!
//! A POM file carries the project version near the top, and a block of
//! properties whose values are derived from that version. Keeping the two in
//! sync by hand is tedious, so Oxiver does it in two passes: the first pass
//! scans the file and decomposes the project version into a [`PropertyMap`],
//! the second pass substitutes every recognized property tag with its mapped
//! value and commits the result.
//!
//! # Text, Not XML
//!
//! No XML parsing is done. The file is interpreted as line-oriented text
//! using regular expressions, which keeps the whole thing dependency-light
//! and predictable. The price is a documented limitation: one tag per line,
//! multi-line tags are not supported.
//!
//! The project version and dependency versions share the exact same textual
//! shape under this contract. As a workaround, the first `<version>` tag
//! wins and all later ones are ignored. See [`extract`].
//!
//! # Committing
//!
//! The second pass never touches the original file directly. It stages the
//! rewritten content into a sibling temporary file, then promotes that file
//! over the original with a rename. If the run dies mid-write, the original
//! is still intact and the only debris is an unpromoted temporary file.
//!
//! # See Also
//!
//! 1. [`extract`]
//! 2. [`rewrite`]

pub mod extract;
pub mod rewrite;

use crate::pom::rewrite::Substituter;

use std::{
    collections::BTreeMap,
    fs::{read_to_string, rename, write},
    path::PathBuf,
};
use tracing::{debug, info, instrument};

/// Named string properties destined for substitution.
///
/// Built once per run by the extractor, consumed read-only by the
/// substitution engine, and discarded when the rewritten file is committed.
///
/// # Invariant
///
/// - First match wins: once a property is set, later insertions under the
///   same name are ignored.
/// - Iteration order is deterministic within a run (sorted by name).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    entries: BTreeMap<String, String>,
}

impl PropertyMap {
    /// Construct new empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property unless it was already set.
    ///
    /// Returns true if the property was inserted.
    pub fn insert_first(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }

        self.entries.insert(name, value.into());
        true
    }

    /// Check if a property was already set.
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.entries.contains_key(name.as_ref())
    }

    /// Look up a property value.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        self.entries.get(name.as_ref()).map(String::as_str)
    }

    /// Iterate properties in deterministic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of properties set so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no property was set at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Two-phase POM property rewriter.
///
/// Phase one extracts version properties from the target file. Phase two
/// stages a rewritten copy into a temporary file and promotes it over the
/// original. [`PomRewriter::apply`] runs the whole pipeline, while
/// [`PomRewriter::stage`] and [`PomRewriter::promote`] stay separate so the
/// original file can be observed untouched in between.
#[derive(Clone, Debug)]
pub struct PomRewriter {
    pom_path: PathBuf,
    temp_path: PathBuf,
}

impl PomRewriter {
    /// Construct new rewriter for target POM file.
    ///
    /// The staging area is always the sibling path with ".tmp" appended, so
    /// the final rename never crosses a filesystem boundary.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let pom_path = path.into();
        let mut temp_path = pom_path.clone().into_os_string();
        temp_path.push(".tmp");

        Self {
            pom_path,
            temp_path: PathBuf::from(temp_path),
        }
    }

    /// Extract version properties from the target file.
    ///
    /// A file without a recognizable version tag produces an incomplete
    /// (possibly empty) map. That is not an error here: substitution simply
    /// skips properties that were never found.
    ///
    /// # Errors
    ///
    /// - Return [`PomError::ReadPomFile`] if the target file cannot be read.
    pub fn extract(&self) -> Result<PropertyMap> {
        let content = read_to_string(&self.pom_path).map_err(|err| PomError::ReadPomFile {
            source: err,
            pom_path: self.pom_path.clone(),
        })?;

        Ok(extract::version_properties(content.lines()))
    }

    /// Stage rewritten content into the temporary file.
    ///
    /// Every line that matches a property tag in either paired or
    /// self-closing form is substituted; every other line is carried over
    /// byte-identical, line terminators included. The original file is not
    /// modified by this step.
    ///
    /// # Errors
    ///
    /// - Return [`PomError::ReadPomFile`] if the target file cannot be read.
    /// - Return [`PomError::WriteTempFile`] if the staged content cannot be
    ///   written.
    #[instrument(skip(self, props), level = "debug")]
    pub fn stage(&self, props: &PropertyMap) -> Result<()> {
        let content = read_to_string(&self.pom_path).map_err(|err| PomError::ReadPomFile {
            source: err,
            pom_path: self.pom_path.clone(),
        })?;

        let substituter = Substituter::new(props);
        let mut staged = String::with_capacity(content.len());
        for raw in content.split_inclusive('\n') {
            let body = raw
                .strip_suffix("\r\n")
                .or_else(|| raw.strip_suffix('\n'))
                .unwrap_or(raw);

            match substituter.substitute(body) {
                Some(line) => {
                    debug!("substitute line: {line:?}");
                    staged.push_str(&line);
                    staged.push_str(&raw[body.len()..]);
                }
                None => staged.push_str(raw),
            }
        }

        write(&self.temp_path, staged).map_err(|err| PomError::WriteTempFile {
            source: err,
            temp_path: self.temp_path.clone(),
        })?;

        Ok(())
    }

    /// Promote the staged temporary file over the original.
    ///
    /// # Errors
    ///
    /// - Return [`PomError::PromoteTempFile`] if the rename fails.
    pub fn promote(&self) -> Result<()> {
        rename(&self.temp_path, &self.pom_path).map_err(|err| PomError::PromoteTempFile {
            source: err,
            temp_path: self.temp_path.clone(),
            pom_path: self.pom_path.clone(),
        })?;

        Ok(())
    }

    /// Run the full extract, stage, promote pipeline.
    ///
    /// Extra properties extend the map after extraction, so the four
    /// version keys always reflect the file under rewrite. Returns the map
    /// that was substituted.
    ///
    /// # Errors
    ///
    /// - Return [`PomError::ReadPomFile`] if the target file cannot be read.
    /// - Return [`PomError::WriteTempFile`] if the staged content cannot be
    ///   written.
    /// - Return [`PomError::PromoteTempFile`] if the final rename fails.
    #[instrument(skip(self, extra), level = "debug")]
    pub fn apply<N, V>(&self, extra: impl IntoIterator<Item = (N, V)>) -> Result<PropertyMap>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut props = self.extract()?;
        for (name, value) in extra {
            props.insert_first(name, value);
        }

        info!(
            "rewrite {:?} with {} properties",
            self.pom_path.display(),
            props.len()
        );
        self.stage(&props)?;
        self.promote()?;

        Ok(props)
    }
}

/// POM rewriting error types.
#[derive(Debug, thiserror::Error)]
pub enum PomError {
    /// Target POM file cannot be read.
    #[error("failed to read POM file at {:?}", pom_path.display())]
    ReadPomFile {
        #[source]
        source: std::io::Error,
        pom_path: PathBuf,
    },

    /// Staged content cannot be written to the temporary file.
    #[error("failed to write temporary file at {:?}", temp_path.display())]
    WriteTempFile {
        #[source]
        source: std::io::Error,
        temp_path: PathBuf,
    },

    /// Temporary file cannot be renamed over the original.
    #[error("failed to replace {:?} with {:?}", pom_path.display(), temp_path.display())]
    PromoteTempFile {
        #[source]
        source: std::io::Error,
        temp_path: PathBuf,
        pom_path: PathBuf,
    },
}

/// Friendly result alias :3
pub type Result<T, E = PomError> = std::result::Result<T, E>;
