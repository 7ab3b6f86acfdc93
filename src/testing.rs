// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test doubles for the shell, file system and output delegates.
//!
//! Each double shares its state through an `Rc`, so a test keeps one clone
//! for assertions while the `Context` owns the other.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::context::{Context, Output};
use crate::error::{FsError, MppmResult, ProcessError};
use crate::fs::FileSystem;
use crate::fs::walk::{compile_glob, extension_pattern, glob_matches};
use crate::shell::{Shell, command_line};

// --- Shell ---

#[derive(Clone)]
enum Scripted {
    Output(String),
    Failure(i32, String),
}

/// Shell double that records invocations and replays scripted results.
///
/// Responses match on the git subcommand words that follow `-C <repo>`.
#[derive(Clone, Default)]
pub(crate) struct RecordingShell {
    calls: Rc<RefCell<Vec<Vec<String>>>>,
    responses: Rc<RefCell<Vec<(Vec<String>, Scripted)>>>,
}

impl RecordingShell {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reply with `output` when the subcommand starts with `prefix`.
    pub(crate) fn respond(&self, prefix: &[&str], output: &str) {
        self.responses.borrow_mut().push((
            prefix.iter().map(ToString::to_string).collect(),
            Scripted::Output(output.to_string()),
        ));
    }

    /// Fail with exit `code` when the subcommand starts with `prefix`.
    pub(crate) fn fail(&self, prefix: &[&str], code: i32, output: &str) {
        self.responses.borrow_mut().push((
            prefix.iter().map(ToString::to_string).collect(),
            Scripted::Failure(code, output.to_string()),
        ));
    }

    /// Every invocation so far, program first.
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Every invocation rendered as a command line.
    pub(crate) fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| command_line(&call[0], &call[1..]))
            .collect()
    }
}

fn subcommand(args: &[String]) -> &[String] {
    if args.len() >= 2 && args[0] == "-C" {
        &args[2..]
    } else {
        args
    }
}

impl Shell for RecordingShell {
    fn execute(&self, program: &str, args: &[String]) -> MppmResult<String> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.borrow_mut().push(call);

        let sub = subcommand(args);
        let scripted = self
            .responses
            .borrow()
            .iter()
            .find(|(prefix, _)| sub.starts_with(prefix))
            .map(|(_, scripted)| scripted.clone());

        match scripted {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::Failure(code, output)) => Err(ProcessError::NonZeroExit {
                command: command_line(program, args),
                code,
                output,
            }
            .into()),
            None => Ok(String::new()),
        }
    }
}

// --- File system ---

/// In-memory file system rooted at nothing in particular.
#[derive(Clone)]
pub(crate) struct MemoryFileSystem {
    files: Rc<RefCell<BTreeMap<PathBuf, Vec<u8>>>>,
    home: PathBuf,
    mutations: Rc<Cell<usize>>,
}

impl MemoryFileSystem {
    pub(crate) fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            files: Rc::default(),
            home: home.into(),
            mutations: Rc::default(),
        }
    }

    /// Seed a file without counting it as a mutation.
    pub(crate) fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    pub(crate) fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub(crate) fn text(&self, path: impl AsRef<Path>) -> Option<String> {
        self.contents(path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    pub(crate) fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    /// Number of create/rename/remove/write operations performed.
    pub(crate) fn mutations(&self) -> usize {
        self.mutations.get()
    }

    fn touch(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }
}

struct MemoryWriter {
    files: Rc<RefCell<BTreeMap<PathBuf, Vec<u8>>>>,
    path: PathBuf,
    buffer: Vec<u8>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.files
            .borrow_mut()
            .insert(self.path.clone(), self.buffer.clone());
        Ok(())
    }
}

impl Drop for MemoryWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl FileSystem for MemoryFileSystem {
    fn open(&self, path: &Path) -> MppmResult<Box<dyn Read>> {
        let contents = self
            .contents(path)
            .ok_or_else(|| FsError::NotFound(path.display().to_string()))?;
        Ok(Box::new(Cursor::new(contents)))
    }

    fn create(&self, path: &Path) -> MppmResult<Box<dyn Write>> {
        self.touch();
        self.files.borrow_mut().insert(path.to_path_buf(), Vec::new());
        Ok(Box::new(MemoryWriter {
            files: Rc::clone(&self.files),
            path: path.to_path_buf(),
            buffer: Vec::new(),
        }))
    }

    fn rename(&self, from: &Path, to: &Path) -> MppmResult<()> {
        self.touch();
        let mut files = self.files.borrow_mut();
        let contents = files
            .remove(from)
            .ok_or_else(|| FsError::NotFound(from.display().to_string()))?;
        files.insert(to.to_path_buf(), contents);
        Ok(())
    }

    fn remove(&self, path: &Path) -> MppmResult<()> {
        self.touch();
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.display().to_string()).into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .borrow()
            .keys()
            .any(|file| file == path || file.starts_with(path))
    }

    fn walk_by_extension(&self, root: &Path, extension: &str) -> MppmResult<Vec<PathBuf>> {
        let pattern = extension_pattern(extension);
        let glob = compile_glob(&pattern)?;
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| {
                path.strip_prefix(root)
                    .is_ok_and(|relative| glob_matches(&glob, relative))
            })
            .cloned()
            .collect())
    }

    fn home_dir(&self) -> MppmResult<PathBuf> {
        Ok(self.home.clone())
    }
}

// --- Output ---

/// Output sink whose contents can be read back.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// --- Harness ---

/// A context wired entirely to doubles, plus handles for assertions.
pub(crate) struct Harness {
    pub(crate) shell: RecordingShell,
    pub(crate) fs: MemoryFileSystem,
    pub(crate) output: SharedBuffer,
    pub(crate) ctx: Context,
}

impl Harness {
    pub(crate) fn new(working_dir: &str, home: &str) -> Self {
        let shell = RecordingShell::new();
        let fs = MemoryFileSystem::new(home);
        let output = SharedBuffer::default();
        let ctx = Context::builder()
            .with_shell(Box::new(shell.clone()))
            .with_fs(Box::new(fs.clone()))
            .with_output(Output::new(output.clone()))
            .with_working_dir(PathBuf::from(working_dir))
            .build();
        Self {
            shell,
            fs,
            output,
            ctx,
        }
    }
}
