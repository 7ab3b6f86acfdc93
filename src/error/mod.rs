// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          MppmError (~24 bytes)
//!                 |
//!   +--------+----+----+------+
//!   |        |         |      |
//!   v        v         v      v
//! Config  Process     Fs     Io
//!  Box      Box       Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config   Read, Parse, IncompatibleVersion, UnknownApplication,
//!            NotLoaded, LibraryExists, LibraryNotFound, ProjectIsGlobal
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs       NotFound, AlreadyExists, IoError, Walk, NoHomeDir
//! ```
//!
//! Delegates return [`MppmResult`]; command flows use the `anyhow`-based
//! [`Result`] so context can be layered on at the config-load boundary.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MppmError`].
pub type MppmResult<T> = std::result::Result<T, MppmError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MppmError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] Box<ConfigError>),

    /// External process failed.
    #[error(transparent)]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error(transparent)]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error(transparent)]
    Io(Box<std::io::Error>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MppmError {
                fn from(err: $error) -> Self {
                    MppmError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file '{path}'")]
    ReadError {
        path: String,
        #[source]
        source: Box<MppmError>,
    },

    /// Configuration file is not valid JSON for the expected schema.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Configuration was written by an incompatible major version.
    #[error(
        "config file '{path}' has version {found}, which is incompatible with mppm {expected}"
    )]
    IncompatibleVersion {
        path: String,
        found: String,
        expected: String,
    },

    /// Application name or version is not registered.
    #[error("unsupported application '{name}' version '{version}'")]
    UnknownApplication { name: String, version: String },

    /// Attempted to save a configuration that was never loaded.
    #[error("{0} config has not been loaded")]
    NotLoaded(&'static str),

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// The library is already tracked.
    #[error("library '{0}' is already tracked")]
    LibraryExists(String),

    /// The library is not tracked.
    #[error("library '{0}' is not tracked")]
    LibraryNotFound(String),

    /// The working directory is the home directory, where the project
    /// document would be the global one.
    #[error("'{0}' is the global config, run mppm inside a project folder")]
    ProjectIsGlobal(String),
}

// --- Process Errors ---

/// External process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}'")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("'{command}' exited with code {code}: {output}")]
    NonZeroExit {
        command: String,
        code: i32,
        output: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Path already exists.
    #[error("path already exists: {0}")]
    AlreadyExists(String),

    /// General I/O error.
    #[error("I/O error on '{path}'")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk '{path}': {message}")]
    Walk { path: String, message: String },

    /// Home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDir,
}

impl FsError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.display().to_string());
        }
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
