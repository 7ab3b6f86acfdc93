// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file_optional(<config dir>/mppm/settings.toml)
//!   .add_toml_file(--settings)
//!   .with_env_prefix("MPPM")
//!   .set(cli overrides)
//!        |
//!        v
//!    build() --> Settings
//! ```

use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::Settings;
use crate::error::Result;

/// Layers settings sources; later sources win.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<PathBuf>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML settings file that must exist.
    ///
    /// The file is read by `build()`, which fails if it is missing or
    /// malformed.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Adds a TOML settings file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.sources.push(path.to_path_buf());
        }
        self
    }

    /// Read `<PREFIX>_<KEY>` environment variables.
    ///
    /// Keys contain underscores themselves, so nesting uses `__`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets an override that wins over every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("settings error: {e}"))?;
        Ok(self)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required settings file is missing or is not valid TOML.
    /// - An environment variable cannot be parsed.
    /// - The merged values do not deserialize into `Settings`.
    /// - A value is out of range.
    pub fn build(self) -> Result<Settings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Settings files in the order they are applied.
    #[must_use]
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
