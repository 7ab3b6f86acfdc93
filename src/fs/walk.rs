// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sequential directory traversal with glob matching.
//!
//! ```text
//! find_files(root, "**/*.als", &WalkOptions)
//!   ignore::WalkBuilder (single thread, sorted by file name)
//!     filter_entry: skip_dirs
//!     wax::Glob on root-relative path
//!   --> Vec<PathBuf> in walk order
//! ```

use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;
use wax::{Glob, Program};

use crate::error::{FsError, MppmResult};

/// Options for directory traversal.
///
/// Hidden entries are always skipped and ignore files are never consulted:
/// a project folder is scanned as it is on disk.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Options for scanning a project folder: `.git` is skipped.
    #[must_use]
    pub fn for_project() -> Self {
        Self::builder()
            .with_skip_dirs(vec![".git".to_string()])
            .build()
    }
}

fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.standard_filters(false);
    builder.hidden(true);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    if !options.skip_dirs().is_empty() {
        let skip_dirs = options.skip_dirs().to_vec();
        builder.filter_entry(move |entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir())
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| skip_dirs.iter().any(|skip| skip == name)))
        });
    }

    builder
}

/// Glob matching every file whose name ends in `.<extension>`.
///
/// `extension` may itself contain dots (`als.xml`).
#[must_use]
pub fn extension_pattern(extension: &str) -> String {
    format!("**/*.{}", extension.trim_start_matches('.'))
}

/// Compile a glob pattern.
///
/// # Errors
///
/// Returns `FsError::Walk` if the pattern is not a valid glob.
pub fn compile_glob(pattern: &str) -> MppmResult<Glob<'_>> {
    Glob::new(pattern).map_err(|e| {
        FsError::Walk {
            path: pattern.to_string(),
            message: format!("invalid glob pattern: {e}"),
        }
        .into()
    })
}

/// Whether `relative` (a path relative to the walk root) matches `glob`.
#[must_use]
pub fn glob_matches(glob: &Glob<'_>, relative: &Path) -> bool {
    glob.is_match(relative)
}

/// Finds files under `root` whose root-relative path matches `pattern`.
///
/// Results come back in walk order, which is sorted by file name within each
/// directory. Entries that cannot be read are logged and skipped.
///
/// # Errors
///
/// Returns an error if the root does not exist or the pattern is invalid.
///
/// # Example
/// ```no_run
/// use mppm::fs::walk::{find_files, WalkOptions};
///
/// let sets = find_files("/music/my-track".as_ref(), "**/*.als", &WalkOptions::for_project())?;
/// for set in sets {
///     println!("{}", set.display());
/// }
/// # Ok::<(), mppm::error::MppmError>(())
/// ```
pub fn find_files(root: &Path, pattern: &str, options: &WalkOptions) -> MppmResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }

    let glob = compile_glob(pattern)?;
    let mut files = Vec::new();

    for entry in build_walker(root, options).build() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && let Ok(relative) = entry.path().strip_prefix(root)
                    && glob_matches(&glob, relative)
                {
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!(error = %e, "walk error"),
        }
    }

    Ok(files)
}
