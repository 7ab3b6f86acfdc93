// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations against one repository.
//!
//! ```text
//! GitManager { repo } --> dyn Shell --> git -C <repo> <subcommand> [args...]
//! ```
//!
//! No retries. A failed command comes back as the `ProcessError` the shell
//! produced, untouched.

use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::MppmResult;

/// Branch that `library checkout --recent` returns libraries to.
pub const DEFAULT_BRANCH: &str = "master";

/// Issues git and git-lfs commands for the repository at `repo`.
pub struct GitManager<'ctx> {
    ctx: &'ctx Context,
    repo: PathBuf,
}

impl<'ctx> GitManager<'ctx> {
    pub(crate) fn new(ctx: &'ctx Context, repo: &Path) -> Self {
        Self {
            ctx,
            repo: repo.to_path_buf(),
        }
    }

    #[must_use]
    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Run `git -C <repo> <args>` and return its output.
    fn git<S: AsRef<str>>(&self, args: &[S]) -> MppmResult<String> {
        let mut full = Vec::with_capacity(args.len() + 2);
        full.push("-C".to_string());
        full.push(self.repo.to_string_lossy().into_owned());
        full.extend(args.iter().map(|a| a.as_ref().to_string()));
        self.ctx.shell().execute(self.ctx.git_program(), &full)
    }

    /// Run a command and echo its output to the output sink.
    fn git_echo<S: AsRef<str>>(&self, args: &[S]) -> MppmResult<()> {
        let output = self.git(args)?;
        self.ctx.output().echo(&output)
    }

    /// Initialize a new repository.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if `git init` fails.
    pub fn init(&self) -> MppmResult<()> {
        self.git_echo(&["init"])
    }

    /// Stage paths (`git add <paths>`).
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if `git add` fails.
    pub fn add(&self, paths: &[&str]) -> MppmResult<()> {
        let mut args = vec!["add"];
        args.extend_from_slice(paths);
        self.git_echo(&args)
    }

    /// Commit (`git commit <args>`).
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if `git commit` fails, including when there
    /// is nothing to commit.
    pub fn commit(&self, args: &[&str]) -> MppmResult<()> {
        let mut full = vec!["commit"];
        full.extend_from_slice(args);
        self.git_echo(&full)
    }

    /// Checkout a branch, tag, or commit.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if `git checkout` fails.
    pub fn checkout(&self, what: &str) -> MppmResult<()> {
        self.git_echo(&["checkout", what])
    }

    /// Resolve a revision to a commit id.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if `git rev-parse` fails.
    pub fn rev_parse(&self, what: &str) -> MppmResult<String> {
        Ok(self.git(&["rev-parse", what])?.trim().to_string())
    }

    /// Porcelain status; empty when the working tree is clean.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if `git status` fails.
    pub fn status_porcelain(&self) -> MppmResult<String> {
        Ok(self.git(&["status", "--porcelain"])?.trim().to_string())
    }

    /// Install the LFS hooks into the repository.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if `git lfs install` fails.
    pub fn lfs_install(&self) -> MppmResult<()> {
        self.git_echo(&["lfs", "install"])
    }

    /// Track patterns with LFS (`git lfs track <patterns>`).
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if `git lfs track` fails.
    pub fn lfs_track<S: AsRef<str>>(&self, patterns: &[S]) -> MppmResult<()> {
        let mut args = vec!["lfs".to_string(), "track".to_string()];
        args.extend(patterns.iter().map(|p| p.as_ref().to_string()));
        self.git_echo(&args)
    }

    /// Pass arbitrary arguments through to git.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the command fails.
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> MppmResult<()> {
        self.git_echo(args)
    }
}
