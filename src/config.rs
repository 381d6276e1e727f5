// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Configuration layout.
//!
//! Specify the layout for the rewrite definition file that Oxiver uses to
//! simplify the process of serialization and deserialization. File I/O is
//! left to the caller to figure out.
//!
//! A rewrite definition is entirely optional. Without one, `set-props`
//! rewrites `pom.xml` in the current working directory using only the
//! extracted version properties. With one, the target file can be renamed
//! and extra name/value properties can ride along through the same
//! substitution engine, since that engine is generic over any property name
//! present in the map.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    path::PathBuf,
    str::FromStr,
};

/// Rewrite definition layout.
///
/// Composed of two basic parts: settings and extra properties. The settings
/// section names the file to rewrite. The property list carries additional
/// name/value pairs to substitute alongside the extracted version
/// properties.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct RewriteDefinition {
    /// Settings for the rewrite.
    #[serde(default)]
    pub settings: RewriteSettings,

    /// Extra property listing to substitute.
    #[serde(rename = "property")]
    pub properties: Option<Vec<RewriteProperty>>,
}

impl RewriteDefinition {
    /// Iterate extra properties as name/value pairs.
    pub fn extra_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .flatten()
            .map(|prop| (prop.name.as_str(), prop.value.as_str()))
    }
}

impl FromStr for RewriteDefinition {
    type Err = ConfigError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut definition: RewriteDefinition =
            toml::de::from_str(data).map_err(ConfigError::Deserialize)?;

        // INVARIANT: Perform shell expansion on target file and property values.
        definition.settings.file = PathBuf::from(
            shellexpand::full(definition.settings.file.to_string_lossy().as_ref())
                .map_err(ConfigError::ShellExpansion)?
                .into_owned(),
        );
        for prop in definition.properties.iter_mut().flatten() {
            prop.value = shellexpand::full(prop.value.as_str())
                .map_err(ConfigError::ShellExpansion)?
                .into_owned();
        }

        Ok(definition)
    }
}

impl Display for RewriteDefinition {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(ConfigError::Serialize)?
                .as_str(),
        )
    }
}

/// Rewrite configuration settings.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct RewriteSettings {
    /// Target file to rewrite.
    #[serde(default = "default_target_file")]
    pub file: PathBuf,
}

impl Default for RewriteSettings {
    fn default() -> Self {
        Self {
            file: default_target_file(),
        }
    }
}

fn default_target_file() -> PathBuf {
    PathBuf::from("pom.xml")
}

/// Extra property listing entry.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct RewriteProperty {
    /// Name of the property tag to substitute.
    pub name: String,

    /// Value to substitute the tag with.
    pub value: String,
}

/// Configuration error types.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to serialize configuration.
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// Failed to perform shell expansion on configuration.
    #[error(transparent)]
    ShellExpansion(#[from] shellexpand::LookupError<std::env::VarError>),
}

impl From<ConfigError> for FmtError {
    fn from(_: ConfigError) -> Self {
        FmtError
    }
}

/// Friendly result alias :3
type Result<T, E = ConfigError> = std::result::Result<T, E>;
