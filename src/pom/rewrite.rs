// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Property substitution engine.
//!
//! Second pass over the POM file. Each line is checked against every
//! property in the map, in deterministic order, for one of two textual
//! forms:
//!
//! 1. Paired tag `<name>ANYTHING</name>`, possibly with other text around
//!    it on the same line. The inner content is replaced and the
//!    surrounding text and tag spelling are preserved as written, including
//!    any whitespace before the closing `>`.
//! 2. Self-closing tag `<name/>`, with optional whitespace before the `/>`.
//!    The tag is expanded into an explicit paired tag around the value.
//!
//! The first substitution wins for a line. Lines matching neither form for
//! any property pass through unchanged, which also covers malformed tags:
//! no schema validation happens here at all.

use crate::pom::PropertyMap;

use regex::Regex;

/// Per-property compiled tag patterns.
#[derive(Debug)]
struct TagPatterns {
    name: String,
    value: String,
    paired: Regex,
    hollow: Regex,
}

/// Line-by-line property substituter.
///
/// Compiles the paired and self-closing patterns for every property up
/// front, in the map's deterministic order, so a full file pass does no
/// pattern building per line.
#[derive(Debug)]
pub struct Substituter {
    tags: Vec<TagPatterns>,
}

impl Substituter {
    /// Construct new substituter over all properties of given map.
    pub fn new(props: &PropertyMap) -> Self {
        let tags = props
            .iter()
            .map(|(name, value)| {
                let tag = regex::escape(name);
                // INVARIANT: Escaped property names always form valid patterns.
                let paired =
                    Regex::new(&format!("^(.*<{tag}\\s*>)([^<]*)(</{tag}\\s*>.*)$")).unwrap();
                let hollow = Regex::new(&format!("^(.*)<{tag}\\s*/>(.*)$")).unwrap();

                TagPatterns {
                    name: name.to_string(),
                    value: value.to_string(),
                    paired,
                    hollow,
                }
            })
            .collect();

        Self { tags }
    }

    /// Substitute the first matching property tag of a line.
    ///
    /// Returns the rewritten line, or [`None`] when no property matches in
    /// either form so the caller can emit the original bytes untouched.
    pub fn substitute(&self, line: &str) -> Option<String> {
        for tag in &self.tags {
            // Try <name>value</name> first.
            if let Some(found) = tag.paired.captures(line) {
                return Some(format!("{}{}{}", &found[1], tag.value, &found[3]));
            }

            // Otherwise try <name/>.
            if let Some(found) = tag.hollow.captures(line) {
                return Some(format!(
                    "{}<{}>{}</{}>{}",
                    &found[1], tag.name, tag.value, tag.name, &found[2]
                ));
            }
        }

        None
    }
}
