// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lazy loading and explicit saving of the two configuration documents.
//!
//! ```text
//! project_config()  <working dir>/.mppm.json   must exist
//! global_config()   <home>/.mppm.json          created with defaults if absent
//!
//! Both documents share a file name, so the home directory cannot hold a
//! project: loading or creating a project document there is rejected.
//!
//! load:  one read  -> serde_json -> validate -> cache
//! save:  cache -> pretty JSON -> one write   (never automatic)
//! ```

use anyhow::Context as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::MppmConfigInfo;
use crate::context::Context;
use crate::error::{ConfigError, FsError, MppmResult, Result};

/// File name of both configuration documents.
pub const CONFIG_FILE_NAME: &str = ".mppm.json";

/// Owns the cached project and global documents for one invocation.
pub struct ConfigManager<'ctx> {
    ctx: &'ctx Context,
    project: Option<MppmConfigInfo>,
    global: Option<MppmConfigInfo>,
}

impl<'ctx> ConfigManager<'ctx> {
    #[must_use]
    pub const fn new(ctx: &'ctx Context) -> Self {
        Self {
            ctx,
            project: None,
            global: None,
        }
    }

    #[must_use]
    pub fn project_config_path(&self) -> PathBuf {
        self.ctx.working_dir().join(CONFIG_FILE_NAME)
    }

    /// The project document path, unless it is the global document.
    fn checked_project_config_path(&self) -> MppmResult<PathBuf> {
        let path = self.project_config_path();
        if let Ok(global) = self.global_config_path()
            && global == path
        {
            return Err(ConfigError::ProjectIsGlobal(path.display().to_string()).into());
        }
        Ok(path)
    }

    /// # Errors
    ///
    /// Returns `FsError::NoHomeDir` if the home directory is unknown.
    pub fn global_config_path(&self) -> MppmResult<PathBuf> {
        Ok(self.ctx.fs().home_dir()?.join(CONFIG_FILE_NAME))
    }

    /// The project document, loaded on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, unreadable, not valid
    /// JSON, written by an incompatible version, or lists an unregistered
    /// application.
    pub fn project_config(&mut self) -> Result<&mut MppmConfigInfo> {
        let config = match self.project.take() {
            Some(config) => config,
            None => self.load_project()?,
        };
        Ok(self.project.insert(config))
    }

    /// The global document, created with defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown, the default
    /// document cannot be written, or the existing one fails to load.
    pub fn global_config(&mut self) -> Result<&mut MppmConfigInfo> {
        let config = match self.global.take() {
            Some(config) => config,
            None => self.load_global()?,
        };
        Ok(self.global.insert(config))
    }

    /// Both documents, project first. The first failure wins.
    ///
    /// # Errors
    ///
    /// Returns the error of whichever load fails first.
    pub fn project_and_global_configs(
        &mut self,
    ) -> Result<(&mut MppmConfigInfo, &mut MppmConfigInfo)> {
        let project = match self.project.take() {
            Some(config) => config,
            None => self.load_project()?,
        };
        let global = match self.global.take() {
            Some(config) => config,
            None => match self.load_global() {
                Ok(config) => config,
                Err(e) => {
                    self.project = Some(project);
                    return Err(e);
                }
            },
        };
        Ok((self.project.insert(project), self.global.insert(global)))
    }

    /// Install a new project document in the cache. Not saved.
    ///
    /// # Errors
    ///
    /// Returns `FsError::AlreadyExists` if a project document is already on
    /// disk, or `ConfigError::ProjectIsGlobal` in the home directory.
    pub fn create_project_config(&mut self, config: MppmConfigInfo) -> Result<&mut MppmConfigInfo> {
        let path = self.checked_project_config_path()?;
        if self.ctx.fs().exists(&path) {
            return Err(FsError::AlreadyExists(path.display().to_string()).into());
        }
        Ok(self.project.insert(config))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::NotLoaded` if the project document was never
    /// loaded, or an error if writing fails.
    pub fn save_project_config(&self) -> Result<()> {
        let config = self
            .project
            .as_ref()
            .ok_or(ConfigError::NotLoaded("project"))?;
        self.write_config(&self.project_config_path(), config)
            .context("failed to save project config")
    }

    /// # Errors
    ///
    /// Returns `ConfigError::NotLoaded` if the global document was never
    /// loaded, or an error if writing fails.
    pub fn save_global_config(&self) -> Result<()> {
        let config = self
            .global
            .as_ref()
            .ok_or(ConfigError::NotLoaded("global"))?;
        let path = self.global_config_path()?;
        self.write_config(&path, config)
            .context("failed to save global config")
    }

    fn load_project(&self) -> Result<MppmConfigInfo> {
        let path = self.checked_project_config_path()?;
        self.read_config(&path)
            .context("failed to load project config")
    }

    fn load_global(&self) -> Result<MppmConfigInfo> {
        let path = self.global_config_path()?;
        if !self.ctx.fs().exists(&path) {
            info!(path = %path.display(), "creating default global config");
            self.write_config(&path, &MppmConfigInfo::default_for_tool())
                .context("failed to create global config")?;
        }
        self.read_config(&path)
            .context("failed to load global config")
    }

    fn read_config(&self, path: &Path) -> MppmResult<MppmConfigInfo> {
        debug!(path = %path.display(), "reading config");
        let text = self
            .ctx
            .fs()
            .read_to_string(path)
            .map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;
        let config: MppmConfigInfo =
            serde_json::from_str(&text).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    fn write_config(&self, path: &Path, config: &MppmConfigInfo) -> MppmResult<()> {
        debug!(path = %path.display(), "writing config");
        let mut json = serde_json::to_string_pretty(config).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        json.push('\n');
        self.ctx.fs().write(path, json.as_bytes())
    }
}
