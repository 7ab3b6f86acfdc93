// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! File system delegate.
//!
//! ```text
//! ConfigManager / extract / project
//!          |
//!          v
//!    dyn FileSystem
//!     |          \
//!     v           v
//! OsFileSystem   MemoryFileSystem (tests)
//!  std::fs        BTreeMap<PathBuf, Vec<u8>>
//!  walk: ignore + wax
//!  write: tempfile persist
//! ```

pub mod walk;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{FsError, MppmResult};
use walk::{WalkOptions, extension_pattern, find_files};

/// Filesystem operations used by mppm.
pub trait FileSystem {
    /// Open a file for reading.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the file does not exist.
    fn open(&self, path: &Path) -> MppmResult<Box<dyn Read>>;

    /// Create (or truncate) a file for writing.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the file cannot be created.
    fn create(&self, path: &Path) -> MppmResult<Box<dyn Write>>;

    /// Rename a file, replacing the destination if it exists.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the rename fails.
    fn rename(&self, from: &Path, to: &Path) -> MppmResult<()>;

    /// Remove a file.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the file cannot be removed.
    fn remove(&self, path: &Path) -> MppmResult<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Files under `root` whose name ends in `.<extension>`, in walk order.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the root does not exist or cannot be walked.
    fn walk_by_extension(&self, root: &Path, extension: &str) -> MppmResult<Vec<PathBuf>>;

    /// The current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NoHomeDir` if it cannot be determined.
    fn home_dir(&self) -> MppmResult<PathBuf>;

    /// Copy a file's contents.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if either side cannot be opened.
    fn copy(&self, from: &Path, to: &Path) -> MppmResult<u64> {
        let mut reader = self.open(from)?;
        let mut writer = self.create(to)?;
        let bytes = std::io::copy(&mut reader, &mut writer).map_err(|e| FsError::io(to, e))?;
        writer.flush().map_err(|e| FsError::io(to, e))?;
        Ok(bytes)
    }

    /// Read a whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the file cannot be read or is not UTF-8.
    fn read_to_string(&self, path: &Path) -> MppmResult<String> {
        let mut contents = String::new();
        self.open(path)?
            .read_to_string(&mut contents)
            .map_err(|e| FsError::io(path, e))?;
        Ok(contents)
    }

    /// Replace a file's contents in one write.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the file cannot be written.
    fn write(&self, path: &Path, contents: &[u8]) -> MppmResult<()> {
        let mut writer = self.create(path)?;
        writer
            .write_all(contents)
            .and_then(|()| writer.flush())
            .map_err(|e| FsError::io(path, e).into())
    }
}

/// File system delegate backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn open(&self, path: &Path) -> MppmResult<Box<dyn Read>> {
        let file = std::fs::File::open(path).map_err(|e| FsError::io(path, e))?;
        Ok(Box::new(file))
    }

    fn create(&self, path: &Path) -> MppmResult<Box<dyn Write>> {
        let file = std::fs::File::create(path).map_err(|e| FsError::io(path, e))?;
        Ok(Box::new(file))
    }

    fn rename(&self, from: &Path, to: &Path) -> MppmResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::io(from, e).into())
    }

    fn remove(&self, path: &Path) -> MppmResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::io(path, e).into())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn walk_by_extension(&self, root: &Path, extension: &str) -> MppmResult<Vec<PathBuf>> {
        find_files(root, &extension_pattern(extension), &WalkOptions::for_project())
    }

    fn home_dir(&self) -> MppmResult<PathBuf> {
        dirs::home_dir().ok_or_else(|| FsError::NoHomeDir.into())
    }

    fn copy(&self, from: &Path, to: &Path) -> MppmResult<u64> {
        std::fs::copy(from, to).map_err(|e| FsError::io(from, e).into())
    }

    /// Writes into a temporary sibling and renames it into place, so readers
    /// never observe a half-written document.
    ///
    /// The result carries the permissions of the file it replaces, or those
    /// of a freshly created file when there was none.
    fn write(&self, path: &Path, contents: &[u8]) -> MppmResult<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::io(dir, e))?;
        temp.write_all(contents)
            .and_then(|()| temp.flush())
            .map_err(|e| FsError::io(temp.path(), e))?;

        let permissions = match std::fs::metadata(path) {
            Ok(metadata) => metadata.permissions(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => fresh_permissions(path)?,
            Err(e) => return Err(FsError::io(path, e).into()),
        };
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| FsError::io(temp.path(), e))?;

        temp.persist(path)
            .map_err(|e| FsError::io(path, e.error))?;
        Ok(())
    }
}

/// Create `path` empty and report the permissions the umask gave it.
fn fresh_permissions(path: &Path) -> MppmResult<std::fs::Permissions> {
    let file = std::fs::File::create_new(path).map_err(|e| FsError::io(path, e))?;
    let metadata = file.metadata().map_err(|e| FsError::io(path, e))?;
    Ok(metadata.permissions())
}

#[cfg(test)]
mod tests;
