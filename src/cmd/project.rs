// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `project` command implementation.

use crate::cli::project::{ProjectArgs, ProjectSubcommand};
use crate::config::ConfigManager;
use crate::context::Context;
use crate::error::Result;
use crate::extract::{extract, restore};
use crate::patterns::registry::all_file_patterns_from_project_config;
use crate::project::project_init;

/// Main handler for the project command.
///
/// # Errors
///
/// Returns an error if the project config fails to load or the selected
/// operation fails.
pub fn run_project_command(
    args: &ProjectArgs,
    ctx: &Context,
    configs: &mut ConfigManager<'_>,
) -> Result<()> {
    match args.subcommand {
        ProjectSubcommand::Extract(flags) => {
            let patterns = all_file_patterns_from_project_config(configs.project_config()?)?;
            extract(ctx, &patterns, flags.preview)?;
            Ok(())
        }
        ProjectSubcommand::Restore(flags) => {
            let patterns = all_file_patterns_from_project_config(configs.project_config()?)?;
            restore(ctx, &patterns, flags.preview)?;
            Ok(())
        }
        ProjectSubcommand::Init(flags) => project_init(ctx, configs, flags.preview),
    }
}
