// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use mppm::context::{Context, Output};
use mppm::error::MppmResult;
use mppm::fs::{FileSystem, OsFileSystem};
use mppm::shell::Shell;

/// Records git invocations and answers `rev-parse` with a fixed commit.
#[derive(Clone, Default)]
pub struct FakeGit {
    calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl FakeGit {
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl Shell for FakeGit {
    fn execute(&self, _program: &str, args: &[String]) -> MppmResult<String> {
        self.calls.borrow_mut().push(args.to_vec());
        if args.iter().any(|arg| arg == "rev-parse") {
            return Ok("0123456789abcdef\n".to_string());
        }
        Ok(String::new())
    }
}

/// A context on the real file system with a fake git and discarded output.
pub fn context_in(working_dir: &Path, home: &Path) -> (Context, FakeGit) {
    let shell = FakeGit::default();
    let ctx = Context::builder()
        .with_shell(Box::new(shell.clone()))
        .with_fs(Box::new(HomeAt {
            home: home.to_path_buf(),
        }))
        .with_output(Output::new(std::io::sink()))
        .with_working_dir(working_dir.to_path_buf())
        .build();
    (ctx, shell)
}

pub fn write_json(path: &Path, json: &str) {
    std::fs::write(path, json).unwrap();
}

/// `OsFileSystem` with the home directory redirected.
struct HomeAt {
    home: std::path::PathBuf,
}

impl FileSystem for HomeAt {
    fn open(&self, path: &Path) -> MppmResult<Box<dyn std::io::Read>> {
        OsFileSystem.open(path)
    }

    fn create(&self, path: &Path) -> MppmResult<Box<dyn std::io::Write>> {
        OsFileSystem.create(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> MppmResult<()> {
        OsFileSystem.rename(from, to)
    }

    fn remove(&self, path: &Path) -> MppmResult<()> {
        OsFileSystem.remove(path)
    }

    fn exists(&self, path: &Path) -> bool {
        OsFileSystem.exists(path)
    }

    fn walk_by_extension(&self, root: &Path, extension: &str) -> MppmResult<Vec<std::path::PathBuf>> {
        OsFileSystem.walk_by_extension(root, extension)
    }

    fn home_dir(&self) -> MppmResult<std::path::PathBuf> {
        Ok(self.home.clone())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> MppmResult<()> {
        OsFileSystem.write(path, contents)
    }
}
