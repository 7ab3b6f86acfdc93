// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --settings FILE   <- Additional settings file(s)
//! --log-level N     <- Console verbosity (0-6)
//! --file-log-level  <- File verbosity (defaults to --log-level)
//! --log-file FILE   <- Log file path
//!
//! Precedence: CLI flags > MPPM_* env > --settings > settings.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(long = "settings", value_name = "FILE", global = true, action = clap::ArgAction::Append)]
    pub settings: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true, value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true, value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Settings overrides as `(key, value)` pairs.
    #[must_use]
    pub fn to_settings_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("output_log_level", level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("file_log_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("log_file", path.display().to_string()));
        }

        overrides
    }
}
