// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! File pattern rules per application.
//!
//! ```text
//! general configs (Audio, Video, System)   always applied
//!            +
//! application configs (Ableton 12, ...)    only those the project lists
//!            |
//!            v  union
//! FilePatternsConfig { gitignore, lfs_track, gzipped_xml }
//!            |
//!   .gitignore   git lfs track   extract / restore
//! ```

pub mod registry;


use serde::Serialize;
use std::collections::BTreeSet;

/// Separator between display names of merged configs.
const NAME_SEPARATOR: &str = " + ";

/// A set of gitignore, LFS and gzipped-XML rules.
///
/// Pattern sets are ordered and deduplicated, so merging is plain set union.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilePatternsConfig {
    pub name: String,
    pub gitignore: BTreeSet<String>,
    pub lfs_track: BTreeSet<String>,
    /// Extensions (without the dot) of files stored as gzipped XML.
    pub gzipped_xml: BTreeSet<String>,
}

impl FilePatternsConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_gitignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gitignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_lfs_track<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lfs_track.extend(patterns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_gzipped_xml<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gzipped_xml.extend(
            extensions
                .into_iter()
                .map(Into::into)
                .map(|ext: String| ext.trim_start_matches('.').to_string()),
        );
        self
    }

    /// Merge two configs.
    ///
    /// The name lists every distinct component name in sorted order, so the
    /// result does not depend on argument order.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let names: BTreeSet<&str> = self
            .name
            .split(NAME_SEPARATOR)
            .chain(other.name.split(NAME_SEPARATOR))
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            name: names.into_iter().collect::<Vec<_>>().join(NAME_SEPARATOR),
            gitignore: self.gitignore.union(&other.gitignore).cloned().collect(),
            lfs_track: self.lfs_track.union(&other.lfs_track).cloned().collect(),
            gzipped_xml: self
                .gzipped_xml
                .union(&other.gzipped_xml)
                .cloned()
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gitignore.is_empty() && self.lfs_track.is_empty() && self.gzipped_xml.is_empty()
    }
}

/// Union of any number of configs; empty input yields an empty config.
pub fn union_all<'a, I>(configs: I) -> FilePatternsConfig
where
    I: IntoIterator<Item = &'a FilePatternsConfig>,
{
    configs
        .into_iter()
        .fold(FilePatternsConfig::default(), |acc, config| acc.union(config))
}
