// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Source control metadata lookup.
//!
//! Asks the Subversion binary about the current working copy and condenses
//! the answer to a single `URL@REVISION` line for embedding into version
//! information files. Subversion itself stays an opaque collaborator behind
//! [`Syscall`], so none of this needs a real working copy under test.

use crate::syscall::Syscall;

use tracing::warn;

/// Look up source control metadata of the current working copy.
///
/// Runs `svn info` and condenses its `URL:` and `Revision:` fields into
/// one line of the form `URL@REVISION`.
///
/// # Errors
///
/// - Return [`ScmError::Syscall`] if the svn binary cannot be run.
/// - Return [`ScmError::UnrecognizedInfo`] if its output carries no URL or
///   revision field.
pub fn scm_info(syscall: &impl Syscall) -> Result<String> {
    let output = syscall.run("svn", ["info"])?;
    parse_info(&output).ok_or(ScmError::UnrecognizedInfo)
}

/// Best-effort variant of [`scm_info`].
///
/// Release builds happen on machines without a working copy more often than
/// anyone admits, so any failure degrades to `"unknown"` with a warning
/// instead of aborting the build.
pub fn scm_info_or_unknown(syscall: &impl Syscall) -> String {
    match scm_info(syscall) {
        Ok(info) => info,
        Err(error) => {
            warn!("source control metadata unavailable: {error}");
            String::from("unknown")
        }
    }
}

fn parse_info(output: &str) -> Option<String> {
    let mut url = None;
    let mut revision = None;
    for line in output.lines() {
        if let Some(value) = line.strip_prefix("URL:") {
            url = Some(value.trim());
        } else if let Some(value) = line.strip_prefix("Revision:") {
            revision = Some(value.trim());
        }
    }

    match (url, revision) {
        (Some(url), Some(revision)) => Some(format!("{url}@{revision}")),
        _ => None,
    }
}

/// Source control metadata error types.
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    /// Underlying svn invocation fails.
    #[error(transparent)]
    Syscall(#[from] crate::syscall::SyscallError),

    /// Output of svn info carries no URL or revision field.
    #[error("svn info output carries no URL or revision field")]
    UnrecognizedInfo,
}

/// Friendly result alias :3
pub type Result<T, E = ScmError> = std::result::Result<T, E>;
