// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project command arguments.
//!
//! ```text
//! project extract [--preview]   binaries -> <file>.xml
//! project restore [--preview]   <file>.xml -> binaries
//! project init [--preview]      .gitignore, git, git lfs
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `project` command.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub subcommand: ProjectSubcommand,
}

/// Project subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProjectSubcommand {
    /// Extracts gzipped-XML project files to `<file>.xml`.
    Extract(PreviewArgs),

    /// Rebuilds project files from their `<file>.xml`.
    Restore(PreviewArgs),

    /// Sets up `.gitignore`, git and git-lfs for the project.
    Init(PreviewArgs),
}

/// Shared `--preview` flag.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct PreviewArgs {
    /// Prints what would be done without doing it.
    #[arg(long)]
    pub preview: bool,
}
