// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library command arguments.

use clap::{ArgGroup, Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `library` command.
#[derive(Debug, Clone, Args)]
pub struct LibraryArgs {
    #[command(subcommand)]
    pub subcommand: LibrarySubcommand,
}

/// Library subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum LibrarySubcommand {
    /// Puts a folder under git and tracks it globally.
    Add(PathArgs),

    /// Lists tracked libraries.
    List,

    /// Stops tracking a library (its files are kept).
    Remove(PathArgs),

    /// Commits changes in every library and records the new commits.
    Backup,

    /// Backs up every library and pins the commits into the project.
    #[command(name = "create-snapshot")]
    CreateSnapshot,

    /// Checks out libraries at recorded commits.
    Checkout(CheckoutArgs),
}

/// A library folder.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Library folder, relative to the current directory or absolute.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Arguments for `library checkout`.
#[derive(Debug, Clone, Copy, Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["recent", "project"]),
))]
pub struct CheckoutArgs {
    /// Checks out the most recent commit of every library.
    #[arg(long)]
    pub recent: bool,

    /// Checks out the commits pinned by the project.
    #[arg(long)]
    pub project: bool,
}
