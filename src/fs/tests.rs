// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::walk::{WalkOptions, extension_pattern, find_files};
use super::{FileSystem, OsFileSystem};
use crate::error::{FsError, MppmError};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn names(root: &std::path::Path, files: &[std::path::PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_extension_pattern() {
    assert_eq!(extension_pattern("als"), "**/*.als");
    assert_eq!(extension_pattern(".als.xml"), "**/*.als.xml");
}

#[test]
fn test_walk_by_extension_skips_git_and_other_extensions() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::create_dir_all(root.join("Samples/Processed")).unwrap();
    std::fs::create_dir_all(root.join(".git")).unwrap();
    std::fs::write(root.join("song.als"), "").unwrap();
    std::fs::write(root.join("song.als.xml"), "").unwrap();
    std::fs::write(root.join("Samples/Processed/bounce.als"), "").unwrap();
    std::fs::write(root.join(".git/stale.als"), "").unwrap();
    std::fs::write(root.join("kick.wav"), "").unwrap();

    let found = OsFileSystem.walk_by_extension(root, "als").unwrap();
    assert_eq!(
        names(root, &found),
        ["Samples/Processed/bounce.als", "song.als"]
    );

    let xml = OsFileSystem.walk_by_extension(root, "als.xml").unwrap();
    assert_eq!(names(root, &xml), ["song.als.xml"]);
}

#[test]
fn test_walk_skips_hidden_and_ignores_gitignore() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::create_dir_all(root.join(".backup")).unwrap();
    std::fs::create_dir_all(root.join("Backup")).unwrap();
    std::fs::write(root.join(".gitignore"), "Backup/\n*.als\n").unwrap();
    std::fs::write(root.join(".backup/old.als"), "").unwrap();
    std::fs::write(root.join(".hidden.als"), "").unwrap();
    std::fs::write(root.join("Backup/song.als"), "").unwrap();
    std::fs::write(root.join("song.als"), "").unwrap();

    let found = OsFileSystem.walk_by_extension(root, "als").unwrap();
    assert_eq!(names(root, &found), ["Backup/song.als", "song.als"]);
}

#[test]
fn test_find_files_missing_root() {
    let temp = temp_dir();
    let err = find_files(&temp.path().join("nope"), "**/*", &WalkOptions::default()).unwrap_err();
    assert!(matches!(err, MppmError::Fs(ref e) if matches!(**e, FsError::NotFound(_))));
}

#[test]
fn test_find_files_invalid_glob() {
    let temp = temp_dir();
    let err = find_files(temp.path(), "**/[", &WalkOptions::default()).unwrap_err();
    assert!(matches!(err, MppmError::Fs(ref e) if matches!(**e, FsError::Walk { .. })));
}

#[test]
fn test_write_replaces_whole_document() {
    let temp = temp_dir();
    let path = temp.path().join("doc.json");
    OsFileSystem.write(&path, b"{\"long\": \"first version\"}").unwrap();
    OsFileSystem.write(&path, b"{}").unwrap();
    assert_eq!(OsFileSystem.read_to_string(&path).unwrap(), "{}");
}

#[cfg(unix)]
#[test]
fn test_write_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let path = temp.path().join(".gitignore");
    std::fs::write(&path, "*.wav\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    OsFileSystem.write(&path, b"*.wav\n*.aif\n").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "*.wav\n*.aif\n");
}

#[cfg(unix)]
#[test]
fn test_write_new_file_uses_default_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let reference = temp.path().join("reference.json");
    std::fs::write(&reference, "{}").unwrap();
    let path = temp.path().join(".mppm.json");

    OsFileSystem.write(&path, b"{}").unwrap();

    let mode = |p: &std::path::Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&path), mode(&reference));
}

#[test]
fn test_copy_rename_remove() {
    let temp = temp_dir();
    let a = temp.path().join("a.bin");
    let b = temp.path().join("b.bin");
    let c = temp.path().join("c.bin");
    std::fs::write(&a, [1u8, 2, 3]).unwrap();

    assert_eq!(OsFileSystem.copy(&a, &b).unwrap(), 3);
    OsFileSystem.rename(&b, &c).unwrap();
    assert!(!OsFileSystem.exists(&b));
    assert_eq!(std::fs::read(&c).unwrap(), [1, 2, 3]);

    OsFileSystem.remove(&c).unwrap();
    assert!(!OsFileSystem.exists(&c));
}

#[test]
fn test_open_missing_is_not_found() {
    let temp = temp_dir();
    let err = OsFileSystem.open(&temp.path().join("missing")).err().unwrap();
    assert!(matches!(err, MppmError::Fs(ref e) if matches!(**e, FsError::NotFound(_))));
}
