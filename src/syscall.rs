// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! External command invocation.
//!
//! Every external tool Oxiver talks to is an opaque collaborator: run the
//! binary, capture its text, or fail. Keeping that one operation behind a
//! trait means the modules built on top never need the real tools in their
//! tests.

use std::{
    ffi::{OsStr, OsString},
    process::Command,
};
use tracing::debug;

/// Layer of indirection for external command invocation.
pub trait Syscall {
    /// Run external command, returning its captured output.
    ///
    /// # Errors
    ///
    /// - Return [`SyscallError::Launch`] if the binary cannot be spawned.
    /// - Return [`SyscallError::Unsuccessful`] if it exits with failure.
    fn run(
        &self,
        bin: impl AsRef<OsStr>,
        args: impl IntoIterator<Item = impl AsRef<OsStr>>,
    ) -> Result<String>;
}

/// External command invocation through real child processes.
#[derive(Debug, Default)]
pub struct BinCall;

impl Syscall for BinCall {
    fn run(
        &self,
        bin: impl AsRef<OsStr>,
        args: impl IntoIterator<Item = impl AsRef<OsStr>>,
    ) -> Result<String> {
        debug!("run external command: {:?}", bin.as_ref());
        let output = Command::new(bin.as_ref())
            .args(args)
            .output()
            .map_err(|err| SyscallError::Launch {
                source: err,
                bin: bin.as_ref().to_os_string(),
            })?;

        let stdout = String::from_utf8_lossy(output.stdout.as_slice()).into_owned();
        let stderr = String::from_utf8_lossy(output.stderr.as_slice()).into_owned();

        if !output.status.success() {
            let mut message = String::new();
            if !stdout.is_empty() {
                message.push_str(format!("stdout: {stdout}").as_str());
            }
            if !stderr.is_empty() {
                message.push_str(format!("stderr: {stderr}").as_str());
            }

            return Err(SyscallError::Unsuccessful {
                bin: bin.as_ref().to_os_string(),
                message,
            });
        }

        // INVARIANT: Chomp trailing newlines.
        let stdout = stdout
            .strip_suffix("\r\n")
            .or(stdout.strip_suffix('\n'))
            .map(ToString::to_string)
            .unwrap_or(stdout);

        Ok(stdout)
    }
}

/// External command invocation error types.
#[derive(Debug, thiserror::Error)]
pub enum SyscallError {
    /// Binary cannot be spawned at all.
    #[error("failed to launch {:?}", bin)]
    Launch {
        #[source]
        source: std::io::Error,
        bin: OsString,
    },

    /// Binary ran but exited with failure.
    #[error("command {:?} failed:\n{message}", bin)]
    Unsuccessful { bin: OsString, message: String },
}

/// Friendly result alias :3
pub type Result<T, E = SyscallError> = std::result::Result<T, E>;
