// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Extract/restore hooks around `mppm git ...`.
//!
//! ```text
//! add commit stash diff status          extract, then git
//! checkout switch merge pull reset
//! rebase cherry-pick revert             git, then restore
//! anything else                         git only
//! ```

use tracing::debug;

use crate::config::ConfigManager;
use crate::context::Context;
use crate::error::Result;
use crate::extract::{extract, restore};
use crate::patterns::registry::all_file_patterns_from_project_config;

/// Subcommands that read the working tree, so text files must be current.
pub const PRE_HOOK_SUBCOMMANDS: &[&str] = &["add", "commit", "stash", "diff", "status"];

/// Subcommands that rewrite the working tree, so binaries must be rebuilt.
pub const POST_HOOK_SUBCOMMANDS: &[&str] = &[
    "checkout",
    "switch",
    "merge",
    "pull",
    "reset",
    "rebase",
    "cherry-pick",
    "revert",
];

/// Which hook applies to a git invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Extract,
    Restore,
}

/// Git global options whose value is the following argument.
///
/// The `--opt=value` spellings are a single argument and need no entry.
const VALUE_OPTIONS: &[&str] = &[
    "-C",
    "-c",
    "--git-dir",
    "--work-tree",
    "--namespace",
    "--config-env",
    "--super-prefix",
];

/// First argument that is neither a global option nor an option's value.
#[must_use]
pub fn subcommand<S: AsRef<str>>(args: &[S]) -> Option<&str> {
    let mut args = args.iter().map(|arg| arg.as_ref());
    while let Some(arg) = args.next() {
        if VALUE_OPTIONS.contains(&arg) {
            args.next();
        } else if !arg.starts_with('-') {
            return Some(arg);
        }
    }
    None
}

#[must_use]
pub fn hook_for<S: AsRef<str>>(args: &[S]) -> Option<Hook> {
    let sub = subcommand(args)?;
    if PRE_HOOK_SUBCOMMANDS.contains(&sub) {
        Some(Hook::Extract)
    } else if POST_HOOK_SUBCOMMANDS.contains(&sub) {
        Some(Hook::Restore)
    } else {
        None
    }
}

/// Run git in the working directory with the matching hook around it.
///
/// # Errors
///
/// Returns an error if a hook needs the project config and it fails to
/// load, if the hook fails, or if git exits non-zero.
pub fn run_git_with_hooks(
    ctx: &Context,
    configs: &mut ConfigManager<'_>,
    args: &[String],
) -> Result<()> {
    let hook = hook_for(args);
    let patterns = match hook {
        Some(_) => Some(all_file_patterns_from_project_config(
            configs.project_config()?,
        )?),
        None => None,
    };
    let git = ctx.git(ctx.working_dir());

    if let (Some(Hook::Extract), Some(patterns)) = (hook, &patterns) {
        let count = extract(ctx, patterns, false)?;
        debug!(count, "pre-hook extracted files");
    }

    git.run(args)?;

    if let (Some(Hook::Restore), Some(patterns)) = (hook, &patterns) {
        let count = restore(ctx, patterns, false)?;
        debug!(count, "post-hook restored files");
    }
    Ok(())
}
