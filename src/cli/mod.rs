// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for mppm using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! mppm [global options] [--show-supported] <command>
//! init <application> [--version V] [--preview]
//! git <args...>
//! project {extract|restore|init} [--preview]
//! library {add|list|remove|backup|create-snapshot|checkout}
//! ```

pub mod global;
pub mod library;
pub mod project;


use crate::cli::global::GlobalOptions;
use crate::cli::library::LibraryArgs;
use crate::cli::project::ProjectArgs;
use clap::{Args, Parser, Subcommand};

/// Music Production Project Manager
///
/// Version control for music production projects.
#[derive(Debug, Parser)]
#[command(
    name = "mppm",
    author,
    version,
    about = "Music Production Project Manager",
    long_about = "mppm Copyright (C) 2026 mppm contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Keeps music production projects and sample libraries under\n\
                  git and git-lfs. Binary project files stored as gzipped XML\n\
                  are extracted to text so they diff cleanly.\n\n\
                  Start with `mppm init <application>` inside a project folder.\n\
                  See `mppm <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  The project config is `.mppm.json` in the current directory.\n\
                  The global config is `.mppm.json` in the home directory and is\n\
                  created with defaults on first use. Tool settings are read\n\
                  from `mppm/settings.toml` in the user config directory, then\n\
                  from --settings, then from MPPM_* environment variables."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Lists supported applications and versions.
    #[arg(long = "show-supported")]
    pub show_supported: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Creates a project config and initializes the project.
    Init(InitArgs),

    /// Runs git with extract/restore hooks.
    Git(GitArgs),

    /// Manages the project in the current directory.
    Project(ProjectArgs),

    /// Manages globally tracked libraries.
    Library(LibraryArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Application the project is made with (see --show-supported).
    #[arg(value_name = "APPLICATION")]
    pub application: String,

    /// Application version; the application's default when omitted.
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Prints what would be done without doing it.
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for the `git` command.
#[derive(Debug, Clone, Args)]
pub struct GitArgs {
    /// Arguments passed to git unchanged.
    #[arg(
        value_name = "ARGS",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
