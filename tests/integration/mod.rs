// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::PomFixture;

use indoc::indoc;
use pretty_assertions::assert_eq;
use sealed_test::prelude::*;
use std::path::Path;

const FIXTURE_POM: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <project xmlns="http://maven.apache.org/POM/4.0.0">
      <modelVersion>4.0.0</modelVersion>
      <groupId>ai.bds</groupId>
      <artifactId>packages</artifactId>
      <version>2.4.9-SNAPSHOT</version>
      <packaging>pom</packaging>
      <properties>
        <ai.ver.major/>
        <ai.ver.minor/>
        <ai.ver.revision/>
        <ai.ver.qualifier/>
      </properties>
      <dependencies>
        <dependency>
          <groupId>ai.lib</groupId>
          <artifactId>utils</artifactId>
          <version>1.0.3</version>
        </dependency>
      </dependencies>
    </project>
"#};

const REWRITTEN_POM: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <project xmlns="http://maven.apache.org/POM/4.0.0">
      <modelVersion>4.0.0</modelVersion>
      <groupId>ai.bds</groupId>
      <artifactId>packages</artifactId>
      <version>2.4.9-SNAPSHOT</version>
      <packaging>pom</packaging>
      <properties>
        <ai.ver.major>2</ai.ver.major>
        <ai.ver.minor>4</ai.ver.minor>
        <ai.ver.revision>9</ai.ver.revision>
        <ai.ver.qualifier>SNAPSHOT</ai.ver.qualifier>
      </properties>
      <dependencies>
        <dependency>
          <groupId>ai.lib</groupId>
          <artifactId>utils</artifactId>
          <version>1.0.3</version>
        </dependency>
      </dependencies>
    </project>
"#};

fn no_extras() -> [(&'static str, &'static str); 0] {
    []
}

#[sealed_test]
fn full_pipeline_rewrites_version_properties() -> anyhow::Result<()> {
    let fixture = PomFixture::write(FIXTURE_POM)?;

    fixture.rewriter().apply(no_extras())?;

    assert_eq!(fixture.contents()?, REWRITTEN_POM);

    Ok(())
}

#[sealed_test]
fn pipeline_is_idempotent() -> anyhow::Result<()> {
    let fixture = PomFixture::write(FIXTURE_POM)?;
    let rewriter = fixture.rewriter();

    rewriter.apply(no_extras())?;
    let first = fixture.contents()?;
    rewriter.apply(no_extras())?;
    let second = fixture.contents()?;

    assert_eq!(first, second);
    assert_eq!(second, REWRITTEN_POM);

    Ok(())
}

#[sealed_test]
fn project_version_wins_over_dependency_versions() -> anyhow::Result<()> {
    let fixture = PomFixture::write(FIXTURE_POM)?;

    let props = fixture.rewriter().extract()?;

    assert_eq!(props.get("ai.ver.major"), Some("2"));
    assert_eq!(props.get("ai.ver.minor"), Some("4"));
    assert_eq!(props.get("ai.ver.revision"), Some("9"));
    assert_eq!(props.get("ai.ver.qualifier"), Some("SNAPSHOT"));

    Ok(())
}

#[sealed_test]
fn original_stays_intact_until_promotion() -> anyhow::Result<()> {
    let fixture = PomFixture::write(FIXTURE_POM)?;
    let rewriter = fixture.rewriter();

    let props = rewriter.extract()?;
    rewriter.stage(&props)?;

    // Staged but not promoted: the original is untouched and the staged
    // content waits in the sibling temporary file.
    assert_eq!(fixture.contents()?, FIXTURE_POM);
    assert!(Path::new("pom.xml.tmp").exists());

    rewriter.promote()?;

    assert_eq!(fixture.contents()?, REWRITTEN_POM);
    assert!(!Path::new("pom.xml.tmp").exists());

    Ok(())
}

#[sealed_test]
fn missing_version_tag_leaves_file_byte_identical() -> anyhow::Result<()> {
    let versionless = indoc! {r#"
        <project>
          <artifactId>packages</artifactId>
          <properties>
            <ai.ver.major/>
          </properties>
        </project>
    "#};
    let fixture = PomFixture::write(versionless)?;

    let props = fixture.rewriter().apply(no_extras())?;

    assert!(props.is_empty());
    assert_eq!(fixture.contents()?, versionless);

    Ok(())
}

#[sealed_test]
fn extra_properties_ride_along_with_extracted_ones() -> anyhow::Result<()> {
    let with_extras = indoc! {r#"
        <project>
          <version>1.2.3</version>
          <properties>
            <ai.ver.major/>
            <ai.build.cfg>stale</ai.build.cfg>
          </properties>
        </project>
    "#};
    let fixture = PomFixture::write(with_extras)?;

    fixture.rewriter().apply([("ai.build.cfg", "Release")])?;

    let expect = indoc! {r#"
        <project>
          <version>1.2.3</version>
          <properties>
            <ai.ver.major>1</ai.ver.major>
            <ai.build.cfg>Release</ai.build.cfg>
          </properties>
        </project>
    "#};
    assert_eq!(fixture.contents()?, expect);

    Ok(())
}

#[sealed_test]
fn extracted_values_win_over_extras_for_version_keys() -> anyhow::Result<()> {
    let fixture = PomFixture::write(FIXTURE_POM)?;

    let props = fixture.rewriter().apply([("ai.ver.major", "99")])?;

    assert_eq!(props.get("ai.ver.major"), Some("2"));
    assert_eq!(fixture.contents()?, REWRITTEN_POM);

    Ok(())
}

#[sealed_test]
fn windows_line_endings_survive_the_rewrite() -> anyhow::Result<()> {
    let crlf = "<project>\r\n<version>1.2.3</version>\r\n<ai.ver.major/>\r\n</project>\r\n";
    let fixture = PomFixture::write(crlf)?;

    fixture.rewriter().apply(no_extras())?;

    let expect =
        "<project>\r\n<version>1.2.3</version>\r\n<ai.ver.major>1</ai.ver.major>\r\n</project>\r\n";
    assert_eq!(fixture.contents()?, expect);

    Ok(())
}
