// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Explicit execution context.
//!
//! ```text
//! Context
//!   shell        dyn Shell       (SystemShell | RecordingShell)
//!   fs           dyn FileSystem  (OsFileSystem | MemoryFileSystem)
//!   output       Output          (stdout | SharedBuffer)
//!   working_dir  project root
//!   git_program  "git" unless overridden in settings
//!   compression  gzip level for restore
//! ```
//!
//! Everything with side effects is reached through a `Context`; nothing is a
//! process-wide singleton.

use bon::Builder;
use std::cell::RefCell;
use std::fmt::Display;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::error::MppmResult;
use crate::fs::{FileSystem, OsFileSystem};
use crate::git::manager::GitManager;
use crate::settings::Settings;
use crate::shell::{Shell, SystemShell};

/// Destination for user-facing command output.
pub struct Output {
    sink: RefCell<Box<dyn Write>>,
}

impl Output {
    pub fn new(sink: impl Write + 'static) -> Self {
        Self {
            sink: RefCell::new(Box::new(sink)),
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Write one line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink rejects the write.
    pub fn line(&self, message: impl Display) -> MppmResult<()> {
        let mut sink = self.sink.borrow_mut();
        writeln!(sink, "{message}")?;
        sink.flush()?;
        Ok(())
    }

    /// Write `text` as-is when it is not blank.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink rejects the write.
    pub fn echo(&self, text: &str) -> MppmResult<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        self.line(text.trim_end())
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Output")
    }
}

/// Side-effect delegates and paths for one mppm invocation.
#[derive(Builder)]
pub struct Context {
    #[builder(setters(name = with_shell))]
    shell: Box<dyn Shell>,
    #[builder(setters(name = with_fs))]
    fs: Box<dyn FileSystem>,
    #[builder(setters(name = with_output))]
    output: Output,
    #[builder(setters(name = with_working_dir))]
    working_dir: PathBuf,
    #[builder(setters(name = with_git_program), default = String::from("git"))]
    git_program: String,
    #[builder(setters(name = with_compression_level), default = 6)]
    compression_level: u32,
}

impl Context {
    /// Context wired to the real system: `std::process`, `std::fs`, stdout.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be determined.
    pub fn system(settings: &Settings) -> MppmResult<Self> {
        Ok(Self::builder()
            .with_shell(Box::new(SystemShell))
            .with_fs(Box::new(OsFileSystem))
            .with_output(Output::stdout())
            .with_working_dir(std::env::current_dir()?)
            .with_git_program(settings.git.clone())
            .with_compression_level(settings.compression_level)
            .build())
    }

    #[must_use]
    pub fn shell(&self) -> &dyn Shell {
        self.shell.as_ref()
    }

    #[must_use]
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    #[must_use]
    pub const fn output(&self) -> &Output {
        &self.output
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    #[must_use]
    pub fn git_program(&self) -> &str {
        &self.git_program
    }

    #[must_use]
    pub const fn compression_level(&self) -> u32 {
        self.compression_level
    }

    /// Resolve a user-supplied path against the working directory.
    ///
    /// Normalized lexically: `.` is dropped and `..` removes the component
    /// before it, so the same folder is always stored under the same
    /// location string. Symlinks are not followed.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        };
        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match normalized.components().next_back() {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    // `..` at the root stays at the root.
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    _ => normalized.push(".."),
                },
                other => normalized.push(other),
            }
        }
        normalized
    }

    /// Git manager for the repository at `repo`.
    #[must_use]
    pub fn git(&self, repo: &Path) -> GitManager<'_> {
        GitManager::new(self, repo)
    }
}
