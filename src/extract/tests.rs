// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{extract, restore};
use crate::patterns::FilePatternsConfig;
use crate::testing::Harness;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};
use std::path::PathBuf;

const SET_XML: &str = "<?xml version=\"1.0\"?><Ableton><LiveSet/></Ableton>";
const CLIP_XML: &str = "<?xml version=\"1.0\"?><Ableton><Clip/></Ableton>";

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

fn gunzip(bytes: &[u8]) -> String {
    let mut text = String::new();
    GzDecoder::new(bytes).read_to_string(&mut text).unwrap();
    text
}

fn ableton() -> FilePatternsConfig {
    FilePatternsConfig::new("Ableton 12").with_gzipped_xml(["als", "alc"])
}

fn project() -> Harness {
    let h = Harness::new("/project", "/home/testuser");
    h.fs.insert("/project/set.als", gzip(SET_XML));
    h.fs.insert("/project/Clips/clip.alc", gzip(CLIP_XML));
    h.fs.insert("/project/kick.wav", vec![0u8; 16]);
    h
}

#[test]
fn test_extract_preview_prints_and_mutates_nothing() {
    let h = project();
    let count = extract(&h.ctx, &ableton(), true).unwrap();

    assert_eq!(count, 2);
    assert_eq!(h.fs.mutations(), 0);
    assert_eq!(
        h.output.lines(),
        [
            "Clips/clip.alc will be extracted to Clips/clip.alc.xml",
            "set.als will be extracted to set.als.xml",
        ]
    );
}

#[test]
fn test_extract_writes_xml_and_keeps_binary() {
    let h = project();
    let before = h.fs.contents("/project/set.als").unwrap();

    assert_eq!(extract(&h.ctx, &ableton(), false).unwrap(), 2);

    assert_eq!(h.fs.text("/project/set.als.xml").unwrap(), SET_XML);
    assert_eq!(h.fs.text("/project/Clips/clip.alc.xml").unwrap(), CLIP_XML);
    assert_eq!(h.fs.contents("/project/set.als").unwrap(), before);
    assert!(
        h.fs.paths()
            .iter()
            .all(|p| !p.to_string_lossy().ends_with(".gz"))
    );
}

#[test]
fn test_extract_invalid_gzip_removes_intermediate() {
    let h = Harness::new("/project", "/home/testuser");
    h.fs.insert("/project/broken.als", b"not gzip at all".to_vec());

    let err = extract(&h.ctx, &ableton(), false).unwrap_err();
    assert!(format!("{err:#}").contains("/project/broken.als.xml.gz"));
    assert_eq!(h.fs.paths(), [PathBuf::from("/project/broken.als")]);
}

#[test]
fn test_restore_preview() {
    let h = Harness::new("/project", "/home/testuser");
    h.fs.insert("/project/set.als.xml", SET_XML);

    assert_eq!(restore(&h.ctx, &ableton(), true).unwrap(), 1);
    assert_eq!(h.fs.mutations(), 0);
    assert_eq!(h.output.lines(), ["set.als.xml will be restored to set.als"]);
}

#[test]
fn test_extract_then_restore_reproduces_payload() {
    let h = project();
    extract(&h.ctx, &ableton(), false).unwrap();

    assert_eq!(restore(&h.ctx, &ableton(), false).unwrap(), 2);

    assert_eq!(gunzip(&h.fs.contents("/project/set.als").unwrap()), SET_XML);
    assert_eq!(
        gunzip(&h.fs.contents("/project/Clips/clip.alc").unwrap()),
        CLIP_XML
    );
    assert!(h.fs.contents("/project/set.als.mppm-tmp").is_none());
}

#[test]
fn test_restore_replaces_stale_binary() {
    let h = Harness::new("/project", "/home/testuser");
    h.fs.insert("/project/set.als", gzip("<old/>"));
    h.fs.insert("/project/set.als.xml", SET_XML);

    restore(&h.ctx, &ableton(), false).unwrap();
    assert_eq!(gunzip(&h.fs.contents("/project/set.als").unwrap()), SET_XML);
}

#[test]
fn test_no_gzipped_extensions_is_a_no_op() {
    let h = project();
    let reaper = FilePatternsConfig::new("Reaper 7").with_lfs_track(["*.rpp-undo"]);
    assert_eq!(extract(&h.ctx, &reaper, false).unwrap(), 0);
    assert_eq!(h.fs.mutations(), 0);
}
