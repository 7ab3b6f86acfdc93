// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `library` command implementation.

use crate::cli::library::{LibraryArgs, LibrarySubcommand};
use crate::config::ConfigManager;
use crate::context::Context;
use crate::error::Result;
use crate::library;

/// Main handler for the library command.
///
/// # Errors
///
/// Returns an error if a config fails to load or save, or a git command
/// fails.
pub fn run_library_command(
    args: &LibraryArgs,
    ctx: &Context,
    configs: &mut ConfigManager<'_>,
) -> Result<()> {
    match &args.subcommand {
        LibrarySubcommand::Add(target) => library::add(ctx, configs, &target.path),
        LibrarySubcommand::List => library::list(ctx, configs),
        LibrarySubcommand::Remove(target) => library::remove(ctx, configs, &target.path),
        LibrarySubcommand::Backup => library::backup(ctx, configs),
        LibrarySubcommand::CreateSnapshot => library::create_snapshot(ctx, configs),
        LibrarySubcommand::Checkout(target) if target.recent => {
            library::checkout_most_recent(ctx, configs)
        }
        LibrarySubcommand::Checkout(_) => library::checkout_project_specified(ctx, configs),
    }
}
