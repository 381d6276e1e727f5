// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Version information file generation.
//!
//! Artifacts built out of the POM tree embed their full build provenance:
//! the POM version, the build number, when and where the build ran, and
//! what the source control state was. All of that is collected into a
//! [`VersionStamp`] whose rendering is a C# assembly-info source file,
//! since the consuming build targets .NET assemblies.
//!
//! The assembly version string is `MAJOR.MINOR.BUILD.REVISION`, with the
//! build number in third position. The POM qualifier is carried in the
//! build-info line but never in the assembly version itself.

use crate::version::PomVersion;

use chrono::{DateTime, Local};
use std::{
    env,
    fmt::{Display, Formatter, Result as FmtResult},
    fs::write,
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

/// Everything a version information file records about one build.
#[derive(Debug, Clone)]
pub struct VersionStamp {
    /// Version of the POM the build runs under.
    pub version: PomVersion,

    /// Build number assigned to this build.
    pub build_number: u32,

    /// Build configuration, e.g. "Debug" or "Release".
    pub configuration: String,

    /// Description to embed into the artifact.
    pub description: String,

    /// Source control metadata, see [`crate::scm`].
    pub scm_info: String,

    /// Wall-clock time of the build.
    pub build_time: DateTime<Local>,

    /// Name of the machine the build ran on.
    pub host: String,
}

impl VersionStamp {
    /// Four-part assembly version string with the build number third.
    pub fn assembly_version(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.version.major, self.version.minor, self.build_number, self.version.revision
        )
    }

    /// Human-readable summary of how the build was produced.
    pub fn build_info(&self) -> String {
        format!(
            "POM: {}, cfg: {}, time: {}, host: {}",
            self.version,
            self.configuration,
            self.build_time.format("%d.%m.%y %H:%M:%S"),
            self.host
        )
    }
}

impl Display for VersionStamp {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        writeln!(fmt, "// This file is auto-generated")?;
        writeln!(fmt, "using System.Reflection;")?;
        writeln!(
            fmt,
            "[assembly: AssemblyVersion(\"{}\")]",
            self.assembly_version()
        )?;
        writeln!(
            fmt,
            "[assembly: AssemblyFileVersion(\"{}\")]",
            self.assembly_version()
        )?;
        writeln!(
            fmt,
            "[assembly: AssemblyDescription(\"{}\")]",
            self.description
        )?;
        writeln!(
            fmt,
            "[assembly: AssemblyInformationalVersion(\"{}\")]",
            self.scm_info
        )?;
        writeln!(
            fmt,
            "[assembly: AssemblyConfiguration(\"{}\")]",
            self.build_info()
        )?;

        Ok(())
    }
}

/// Write rendered version information file to target path.
///
/// Creates the missing parent directory of the output path first, so build
/// scripts can point into not-yet-existing generated-source trees.
///
/// # Errors
///
/// - Return [`GenVerError::CreateOutputDir`] if the parent directory cannot
///   be created.
/// - Return [`GenVerError::WriteVersionFile`] if the rendering cannot be
///   written.
#[instrument(skip(path, stamp), level = "debug")]
pub fn write_version_file(path: impl AsRef<Path>, stamp: &VersionStamp) -> Result<()> {
    let path = path.as_ref();
    if let Some(out_dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        let _ = mkdirp::mkdirp(out_dir).map_err(|err| GenVerError::CreateOutputDir {
            source: err,
            out_dir: out_dir.to_path_buf(),
        })?;
    }

    info!("write version file to {:?}", path.display());
    write(path, stamp.to_string()).map_err(|err| GenVerError::WriteVersionFile {
        source: err,
        out_path: path.to_path_buf(),
    })?;

    Ok(())
}

/// Name of the machine running the build.
///
/// Resolved from the environment, "unknown" when nothing is set.
pub fn build_host() -> String {
    env::var("HOSTNAME")
        .or_else(|_| env::var("COMPUTERNAME"))
        .unwrap_or_else(|_| String::from("unknown"))
}

/// Version file generation error types.
#[derive(Debug, thiserror::Error)]
pub enum GenVerError {
    /// Output directory cannot be created.
    #[error("failed to create output directory at {:?}", out_dir.display())]
    CreateOutputDir {
        #[source]
        source: std::io::Error,
        out_dir: PathBuf,
    },

    /// Version file cannot be written.
    #[error("failed to write version file at {:?}", out_path.display())]
    WriteVersionFile {
        #[source]
        source: std::io::Error,
        out_path: PathBuf,
    },
}

/// Friendly result alias :3
pub type Result<T, E = GenVerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;

    fn stamp() -> VersionStamp {
        VersionStamp {
            version: "1.2.3-beta".parse().unwrap(),
            build_number: 77,
            configuration: "Release".into(),
            description: "packaging tools".into(),
            scm_info: "svn://build.example.org/bds/trunk@4211".into(),
            // INVARIANT: Formatting prints wall-clock time, so the local
            // zone never leaks into the expectation.
            build_time: Local.with_ymd_and_hms(2026, 8, 6, 12, 30, 0).unwrap(),
            host: "buildhost".into(),
        }
    }

    #[test]
    fn assembly_version_places_build_number_third() {
        assert_eq!(stamp().assembly_version(), "1.2.77.3");
    }

    #[test]
    fn renders_assembly_info_source() {
        let result = stamp().to_string();
        let expect = indoc! {r#"
            // This file is auto-generated
            using System.Reflection;
            [assembly: AssemblyVersion("1.2.77.3")]
            [assembly: AssemblyFileVersion("1.2.77.3")]
            [assembly: AssemblyDescription("packaging tools")]
            [assembly: AssemblyInformationalVersion("svn://build.example.org/bds/trunk@4211")]
            [assembly: AssemblyConfiguration("POM: 1.2.3-beta, cfg: Release, time: 06.08.26 12:30:00, host: buildhost")]
        "#};
        assert_eq!(result, expect);
    }

    #[sealed_test]
    fn writes_into_missing_output_directory() -> anyhow::Result<()> {
        write_version_file("generated/props/VersionInfo.cs", &stamp())?;

        let result = std::fs::read_to_string("generated/props/VersionInfo.cs")?;
        assert_eq!(result, stamp().to_string());

        Ok(())
    }

    #[sealed_test(env = [("HOSTNAME", "builder42")])]
    fn build_host_comes_from_environment() {
        assert_eq!(build_host(), "builder42");
    }
}
