// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Version property extraction.
//!
//! First pass over the POM file. Scans for a `<version>` tag whose inner
//! text is a dotted version triple, and decomposes it into the four
//! well-known properties. The first matching line wins; dependency versions
//! further down the file share the same textual shape and must not clobber
//! the project version.

use crate::{pom::PropertyMap, version::PomVersion};

use once_cell::sync::Lazy;
use regex::Regex;

/// Major component of the project version.
pub const VER_MAJOR: &str = "ai.ver.major";

/// Minor component of the project version.
pub const VER_MINOR: &str = "ai.ver.minor";

/// Revision component of the project version.
pub const VER_REVISION: &str = "ai.ver.revision";

/// Qualifier of the project version, empty when absent.
pub const VER_QUALIFIER: &str = "ai.ver.qualifier";

// INVARIANT: Pattern is valid, checked by unit tests.
static VERSION_TAG: Lazy<Regex> = Lazy::new(|| Regex::new("<version>([^<]*)</version>").unwrap());

/// Extract version properties from an ordered sequence of lines.
///
/// Populates [`VER_MAJOR`], [`VER_MINOR`], [`VER_REVISION`], and
/// [`VER_QUALIFIER`] from the first `<version>` tag whose inner text parses
/// as a [`PomVersion`]. Lines whose tag holds anything else, like the
/// two-part versions Maven allows for dependencies, are not version lines.
/// When nothing matches the returned map is simply empty.
pub fn version_properties<'a>(lines: impl IntoIterator<Item = &'a str>) -> PropertyMap {
    let mut props = PropertyMap::new();
    for line in lines {
        // INVARIANT: Ignore 2nd, etc. <version> tags.
        if props.contains(VER_MAJOR) {
            continue;
        }

        for found in VERSION_TAG.captures_iter(line) {
            if let Ok(version) = found[1].parse::<PomVersion>() {
                props.insert_first(VER_MAJOR, version.major);
                props.insert_first(VER_MINOR, version.minor);
                props.insert_first(VER_REVISION, version.revision);
                props.insert_first(VER_QUALIFIER, version.qualifier);
                break;
            }
        }
    }

    props
}
