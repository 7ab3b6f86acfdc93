// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `init` command implementation.

use crate::cli::InitArgs;
use crate::config::ConfigManager;
use crate::context::Context;
use crate::error::Result;
use crate::project::init_project;

/// # Errors
///
/// Returns an error if the application is unsupported, a project config
/// already exists, or project setup fails.
pub fn run_init_command(
    args: &InitArgs,
    ctx: &Context,
    configs: &mut ConfigManager<'_>,
) -> Result<()> {
    init_project(
        ctx,
        configs,
        &args.application,
        args.version.as_deref(),
        args.preview,
    )
}
