// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

mod integration;

use anyhow::Result;
use oxiver::pom::PomRewriter;
use std::{fs, path::PathBuf};

/// POM file fixture in the current working directory.
///
/// Every test runs sealed inside its own temporary working directory, so a
/// fixed relative filename never collides between tests.
pub(crate) struct PomFixture {
    path: PathBuf,
}

impl PomFixture {
    pub(crate) fn write(contents: impl AsRef<str>) -> Result<Self> {
        let path = PathBuf::from("pom.xml");
        fs::write(&path, contents.as_ref())?;

        Ok(Self { path })
    }

    pub(crate) fn contents(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    pub(crate) fn rewriter(&self) -> PomRewriter {
        PomRewriter::new(&self.path)
    }
}
