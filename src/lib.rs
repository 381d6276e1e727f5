// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Build and release automation for POM-driven artifact packaging.
//!
//! Oxiver bundles the small release chores of a Maven and Subversion based
//! packaging workflow into one binary: rewriting version properties inside a
//! POM file, deriving build numbers from the calendar, collecting SCM
//! metadata, and generating version information files for the artifacts
//! being built. Every operation is a single sequential pass over a handful
//! of lines of text. External tools are only ever reached through the
//! [`syscall::Syscall`] trait, so everything else stays testable without
//! them.

pub mod buildnum;
pub mod config;
pub mod genver;
pub mod path;
pub mod pom;
pub mod scm;
pub mod syscall;
pub mod version;
