// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library folders shared between projects.
//!
//! ```text
//! global .mppm.json                     project .mppm.json
//!   libraries: [ location,                libraries: [ location,
//!                most-recent, current ]                most-recent, current ]
//!
//! add              git init, lfs, initial commit -> global
//! backup           commit changes, HEAD -> most-recent = current
//! create-snapshot  backup, then global entries -> project
//! checkout
//!   --recent       every global library -> master
//!   --project      every project library -> its pinned commit
//! ```
//!
//! Failures stop the command at once. Libraries already processed keep the
//! state saved for them.


use std::path::Path;
use tracing::{info, warn};

use crate::config::{ConfigManager, LibraryConfig};
use crate::context::Context;
use crate::error::{ConfigError, Result};
use crate::git::DEFAULT_BRANCH;

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit.";
const BACKUP_COMMIT_MESSAGE: &str = "Backup.";

/// Put a folder under version control and track it globally.
///
/// # Errors
///
/// Returns `ConfigError::LibraryExists` if the folder is already tracked,
/// or an error if a git command or the global config save fails.
pub fn add(ctx: &Context, configs: &mut ConfigManager<'_>, path: &Path) -> Result<()> {
    let location = ctx.resolve(path);
    if configs.global_config()?.find_library(&location).is_some() {
        return Err(ConfigError::LibraryExists(location.display().to_string()).into());
    }

    let git = ctx.git(&location);
    git.init()?;
    git.lfs_install()?;
    git.lfs_track(&["*"])?;
    git.add(&["-A", "."])?;
    git.commit(&["-m", INITIAL_COMMIT_MESSAGE])?;
    let head = git.rev_parse("HEAD")?;

    configs
        .global_config()?
        .libraries
        .push(LibraryConfig::at_commit(&location, head));
    configs.save_global_config()?;
    info!(location = %location.display(), "library added");
    Ok(())
}

/// Print every tracked library.
///
/// # Errors
///
/// Returns an error if the global config fails to load.
pub fn list(ctx: &Context, configs: &mut ConfigManager<'_>) -> Result<()> {
    let global = configs.global_config()?;
    let output = ctx.output();
    if global.libraries.is_empty() {
        output.line("No libraries tracked")?;
    }
    for library in &global.libraries {
        output.line(format_args!(
            "{} (current: {}, most recent: {})",
            library.location.display(),
            library.current_version,
            library.most_recent_version
        ))?;
    }
    Ok(())
}

/// Stop tracking a library. Its files are left alone.
///
/// # Errors
///
/// Returns `ConfigError::LibraryNotFound` if the folder is not tracked.
pub fn remove(ctx: &Context, configs: &mut ConfigManager<'_>, path: &Path) -> Result<()> {
    let location = ctx.resolve(path);
    let global = configs.global_config()?;
    let before = global.libraries.len();
    global.libraries.retain(|library| library.location != location);
    if global.libraries.len() == before {
        return Err(ConfigError::LibraryNotFound(location.display().to_string()).into());
    }
    configs.save_global_config()?;
    info!(location = %location.display(), "library removed");
    Ok(())
}

/// Commit outstanding changes in every library and record HEAD.
///
/// # Errors
///
/// Returns an error if a git command or a global config save fails.
pub fn backup(ctx: &Context, configs: &mut ConfigManager<'_>) -> Result<()> {
    let count = configs.global_config()?.libraries.len();
    for index in 0..count {
        let location = configs.global_config()?.libraries[index].location.clone();
        let git = ctx.git(&location);
        if !git.status_porcelain()?.is_empty() {
            git.add(&["-A", "."])?;
            git.commit(&["-m", BACKUP_COMMIT_MESSAGE])?;
        }
        let head = git.rev_parse("HEAD")?;

        let library = &mut configs.global_config()?.libraries[index];
        library.most_recent_version.clone_from(&head);
        library.current_version = head;
        configs.save_global_config()?;
    }
    info!(count, "libraries backed up");
    Ok(())
}

/// Back up every library and pin the results into the project config.
///
/// # Errors
///
/// Returns an error if either config fails to load or save, or a backup
/// step fails.
pub fn create_snapshot(ctx: &Context, configs: &mut ConfigManager<'_>) -> Result<()> {
    configs.project_config()?;
    backup(ctx, configs)?;

    let (project, global) = configs.project_and_global_configs()?;
    for library in &global.libraries {
        project.upsert_library(library.clone());
    }
    configs.save_project_config()?;
    info!("snapshot created");
    Ok(())
}

/// Return every global library to the default branch.
///
/// # Errors
///
/// Returns an error if a checkout or a global config save fails.
pub fn checkout_most_recent(ctx: &Context, configs: &mut ConfigManager<'_>) -> Result<()> {
    let count = configs.global_config()?.libraries.len();
    for index in 0..count {
        let location = configs.global_config()?.libraries[index].location.clone();
        ctx.git(&location).checkout(DEFAULT_BRANCH)?;

        let library = &mut configs.global_config()?.libraries[index];
        library.current_version.clone_from(&library.most_recent_version);
        configs.save_global_config()?;
    }
    Ok(())
}

/// Check out every project library at the commit the project pins.
///
/// Libraries the global config does not track are skipped with a warning.
///
/// # Errors
///
/// Returns an error if either config fails to load or save, or a checkout
/// fails.
pub fn checkout_project_specified(ctx: &Context, configs: &mut ConfigManager<'_>) -> Result<()> {
    let count = configs.project_config()?.libraries.len();
    for index in 0..count {
        let (project, global) = configs.project_and_global_configs()?;
        let pinned = &mut project.libraries[index];
        let Some(tracked) = global.find_library_mut(&pinned.location) else {
            warn!(
                location = %pinned.location.display(),
                "library is not tracked globally, skipping"
            );
            continue;
        };

        pinned.most_recent_version.clone_from(&tracked.most_recent_version);
        tracked.current_version.clone_from(&pinned.current_version);
        let location = pinned.location.clone();
        let commit = pinned.current_version.clone();

        ctx.git(&location).checkout(&commit)?;
        configs.save_project_config()?;
        configs.save_global_config()?;
    }
    Ok(())
}
