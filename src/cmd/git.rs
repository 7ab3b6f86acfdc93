// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git` pass-through command implementation.

use crate::cli::GitArgs;
use crate::config::ConfigManager;
use crate::context::Context;
use crate::error::Result;
use crate::git::hooks::run_git_with_hooks;

/// # Errors
///
/// Returns an error if a hook or git itself fails.
pub fn run_git_command(args: &GitArgs, ctx: &Context, configs: &mut ConfigManager<'_>) -> Result<()> {
    run_git_with_hooks(ctx, configs, &args.args)
}
