// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool settings for mppm itself.
//!
//! These are distinct from the project and global `.mppm.json` documents:
//! they control how mppm runs, not what it manages.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. defaults
//! 2. <config dir>/mppm/settings.toml
//! 3. --settings FILE
//! 4. MPPM_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MPPM_GIT=/usr/bin/git        -> git = "/usr/bin/git"
//! MPPM_COMPRESSION_LEVEL=9     -> compression_level = 9
//! MPPM_OUTPUT_LOG_LEVEL=4      -> output_log_level = 4
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, MppmResult};
use crate::logging::{LogConfig, LogLevel};

pub use loader::SettingsLoader;

/// Highest gzip level accepted by `compression_level`.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Tool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Console verbosity (0-6).
    pub output_log_level: LogLevel,
    /// Log file verbosity (0-6).
    pub file_log_level: LogLevel,
    /// Optional log file.
    pub log_file: Option<PathBuf>,
    /// Git executable run by the git manager.
    pub git: String,
    /// Gzip level used when restoring binary documents.
    pub compression_level: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            git: "git".to_string(),
            compression_level: 6,
        }
    }
}

impl Settings {
    /// Check value ranges the types alone do not enforce.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty `git` or a
    /// compression level above 9.
    pub fn validate(&self) -> MppmResult<()> {
        if self.git.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "git".to_string(),
                message: "git program must not be empty".to_string(),
            }
            .into());
        }
        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(ConfigError::InvalidValue {
                key: "compression_level".to_string(),
                message: format!(
                    "compression level must be 0-{MAX_COMPRESSION_LEVEL}, got {}",
                    self.compression_level
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Logging configuration derived from these settings.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.output_log_level)
            .with_file_level(self.file_log_level)
            .maybe_with_log_file(self.log_file.clone())
            .build()
    }
}

/// Location of the user-level settings file, if a config directory exists.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mppm").join("settings.toml"))
}
