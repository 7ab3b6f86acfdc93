// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project setup: `init <application>` and `project init`.
//!
//! ```text
//! init Ableton --version 11
//!   create .mppm.json  { Ableton 11 }
//!   project init
//!     .gitignore   += missing patterns under "# mppm"
//!     git init
//!     git lfs install
//!     git lfs track <all lfs patterns>
//! ```


use std::collections::BTreeSet;
use tracing::info;

use crate::config::{ApplicationConfig, CONFIG_FILE_NAME, ConfigManager, MppmConfigInfo};
use crate::context::Context;
use crate::error::{ConfigError, Result};
use crate::patterns::registry::{all_file_patterns_from_project_config, applications, find_application};

pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Line that introduces the patterns mppm adds to `.gitignore`.
pub const GITIGNORE_MARKER: &str = "# mppm";

/// Patterns not already present as a line of `existing`.
pub fn missing_patterns<'a, I>(existing: &str, patterns: I) -> Vec<&'a String>
where
    I: IntoIterator<Item = &'a String>,
{
    let present: BTreeSet<&str> = existing.lines().map(str::trim).collect();
    patterns
        .into_iter()
        .filter(|pattern| !present.contains(pattern.as_str()))
        .collect()
}

/// Append `missing` to an existing `.gitignore` text, under the mppm
/// marker. Existing lines are kept as they are.
#[must_use]
pub fn merge_gitignore(existing: &str, missing: &[&String]) -> String {
    let mut merged = existing.to_string();
    if !merged.is_empty() && !merged.ends_with('\n') {
        merged.push('\n');
    }
    if !existing.lines().any(|line| line.trim() == GITIGNORE_MARKER) {
        if !merged.is_empty() {
            merged.push('\n');
        }
        merged.push_str(GITIGNORE_MARKER);
        merged.push('\n');
    }
    for pattern in missing {
        merged.push_str(pattern);
        merged.push('\n');
    }
    merged
}

/// Set up git, LFS and `.gitignore` for the project in the working
/// directory.
///
/// # Errors
///
/// Returns an error if the project config fails to load, `.gitignore`
/// cannot be read or written, or a git command fails.
pub fn project_init(ctx: &Context, configs: &mut ConfigManager<'_>, preview: bool) -> Result<()> {
    let patterns = all_file_patterns_from_project_config(configs.project_config()?)?;
    let root = ctx.working_dir();
    let gitignore = root.join(GITIGNORE_FILE_NAME);

    let existing = if ctx.fs().exists(&gitignore) {
        ctx.fs().read_to_string(&gitignore)?
    } else {
        String::new()
    };
    let missing = missing_patterns(&existing, &patterns.gitignore);

    if preview {
        let output = ctx.output();
        for pattern in &missing {
            output.line(format_args!(
                "{pattern} will be added to {GITIGNORE_FILE_NAME}"
            ))?;
        }
        output.line(format_args!(
            "git repository will be initialized in {}",
            root.display()
        ))?;
        for pattern in &patterns.lfs_track {
            output.line(format_args!("{pattern} will be tracked with git lfs"))?;
        }
        return Ok(());
    }

    if !missing.is_empty() {
        let merged = merge_gitignore(&existing, &missing);
        ctx.fs().write(&gitignore, merged.as_bytes())?;
    }

    let git = ctx.git(root);
    git.init()?;
    git.lfs_install()?;
    if !patterns.lfs_track.is_empty() {
        let lfs: Vec<&String> = patterns.lfs_track.iter().collect();
        git.lfs_track(&lfs)?;
    }
    info!(root = %root.display(), "project initialized");
    Ok(())
}

/// Create a project config for `application` and initialize the project.
///
/// # Errors
///
/// Returns `ConfigError::UnknownApplication` for an unregistered name or
/// version, an error if a project config already exists, or any error from
/// [`project_init`].
pub fn init_project(
    ctx: &Context,
    configs: &mut ConfigManager<'_>,
    application: &str,
    version: Option<&str>,
    preview: bool,
) -> Result<()> {
    let unknown = || ConfigError::UnknownApplication {
        name: application.to_string(),
        version: version.unwrap_or_default().to_string(),
    };
    let app = find_application(application).ok_or_else(unknown)?;
    let version = version.unwrap_or(app.default_version());
    if !app.supports(version) {
        return Err(unknown().into());
    }

    configs.create_project_config(MppmConfigInfo::new(vec![ApplicationConfig::new(
        app.name(),
        version,
    )]))?;

    if preview {
        ctx.output().line(format_args!(
            "{CONFIG_FILE_NAME} will be created for {} {version}",
            app.name()
        ))?;
    } else {
        configs.save_project_config()?;
    }
    project_init(ctx, configs, preview)
}

/// Print every supported application and its versions.
///
/// # Errors
///
/// Returns an error if the output sink rejects the write.
pub fn show_supported(ctx: &Context) -> Result<()> {
    for app in applications() {
        ctx.output().line(app.supported_line())?;
    }
    Ok(())
}
