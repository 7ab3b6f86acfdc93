// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project and global configuration documents.
//!
//! Both documents share one schema:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "applications": [{ "name": "Ableton", "version": "12" }],
//!   "libraries": [{
//!     "location": "/home/user/library",
//!     "most-recent-version": "<commit>",
//!     "current-version": "<commit>"
//!   }]
//! }
//! ```

use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, MppmResult};
use crate::patterns::registry::{application_patterns, applications};

/// Version written into new documents and checked on load.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// An application a project is made with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub name: String,
    pub version: String,
}

impl ApplicationConfig {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A library folder under version control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LibraryConfig {
    pub location: PathBuf,
    /// Newest commit recorded by `library backup`.
    pub most_recent_version: String,
    /// Commit currently checked out.
    pub current_version: String,
}

impl LibraryConfig {
    /// A library whose most recent and current commits are both `commit`.
    pub fn at_commit(location: impl Into<PathBuf>, commit: impl Into<String>) -> Self {
        let commit = commit.into();
        Self {
            location: location.into(),
            most_recent_version: commit.clone(),
            current_version: commit,
        }
    }
}

/// A project or global configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MppmConfigInfo {
    pub version: String,
    #[serde(default)]
    pub applications: Vec<ApplicationConfig>,
    #[serde(default)]
    pub libraries: Vec<LibraryConfig>,
}

impl MppmConfigInfo {
    /// A document at the running tool version with no libraries.
    #[must_use]
    pub fn new(applications: Vec<ApplicationConfig>) -> Self {
        Self {
            version: TOOL_VERSION.to_string(),
            applications,
            libraries: Vec::new(),
        }
    }

    /// Every registered application at its default version.
    #[must_use]
    pub fn default_for_tool() -> Self {
        Self::new(
            applications()
                .iter()
                .map(|app| ApplicationConfig::new(app.name(), app.default_version()))
                .collect(),
        )
    }

    /// Check the version and application invariants.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ParseError` if `version` is not a semantic version.
    /// - `ConfigError::IncompatibleVersion` if its major version differs
    ///   from the running tool's.
    /// - `ConfigError::UnknownApplication` for an unregistered application.
    pub fn validate(&self, path: &Path) -> MppmResult<()> {
        let found = Version::parse(&self.version).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format!("invalid version '{}': {e}", self.version),
        })?;
        let expected = Version::parse(TOOL_VERSION).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format!("invalid tool version '{TOOL_VERSION}': {e}"),
        })?;

        if found.major != expected.major {
            return Err(ConfigError::IncompatibleVersion {
                path: path.display().to_string(),
                found: self.version.clone(),
                expected: TOOL_VERSION.to_string(),
            }
            .into());
        }

        for app in &self.applications {
            application_patterns(&app.name, &app.version)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn find_library(&self, location: &Path) -> Option<&LibraryConfig> {
        self.libraries.iter().find(|lib| lib.location == location)
    }

    pub fn find_library_mut(&mut self, location: &Path) -> Option<&mut LibraryConfig> {
        self.libraries.iter_mut().find(|lib| lib.location == location)
    }

    /// Replace the library at the same location, or append it.
    pub fn upsert_library(&mut self, library: LibraryConfig) {
        match self.find_library_mut(&library.location) {
            Some(existing) => *existing = library,
            None => self.libraries.push(library),
        }
    }
}
