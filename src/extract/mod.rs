// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion between binary project files and their gzipped-XML text.
//!
//! ```text
//! extract:  set.als --copy--> set.als.xml.gz --gunzip--> set.als.xml
//!                                   '-- removed
//!
//! restore:  set.als.xml --gzip--> set.als.mppm-tmp --rename--> set.als
//! ```
//!
//! The binary file is untouched by extract. Restore replaces it in one
//! rename, so an interrupted restore leaves the old binary in place.

#[cfg(test)]
mod tests;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::context::Context;
use crate::error::{FsError, MppmResult, Result};
use crate::fs::FileSystem;
use crate::patterns::FilePatternsConfig;

const XML_SUFFIX: &str = "xml";
const GZ_SUFFIX: &str = "xml.gz";
const TEMP_SUFFIX: &str = "mppm-tmp";

/// `path` with `.suffix` appended to the full file name.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

fn relative<'a>(root: &Path, path: &'a Path) -> std::path::Display<'a> {
    path.strip_prefix(root).unwrap_or(path).display()
}

/// Convert every gzipped-XML binary under the working directory to
/// `<file>.xml`. Returns the number of files affected.
///
/// With `preview`, prints what would happen and touches nothing.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked, a file cannot be copied,
/// or a file is not valid gzip.
pub fn extract(ctx: &Context, patterns: &FilePatternsConfig, preview: bool) -> Result<usize> {
    let root = ctx.working_dir();
    let mut count = 0;
    for ext in &patterns.gzipped_xml {
        for file in ctx.fs().walk_by_extension(root, ext)? {
            let xml = with_suffix(&file, XML_SUFFIX);
            if preview {
                ctx.output().line(format_args!(
                    "{} will be extracted to {}",
                    relative(root, &file),
                    relative(root, &xml)
                ))?;
            } else {
                extract_file(ctx.fs(), &file, &xml)?;
            }
            count += 1;
        }
    }
    if !preview {
        info!(count, "extracted project files");
    }
    Ok(count)
}

/// Convert every `<file>.xml` back into its gzipped binary. Returns the
/// number of files affected.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked or a file cannot be
/// compressed or renamed.
pub fn restore(ctx: &Context, patterns: &FilePatternsConfig, preview: bool) -> Result<usize> {
    let root = ctx.working_dir();
    let level = Compression::new(ctx.compression_level());
    let mut count = 0;
    for ext in &patterns.gzipped_xml {
        let xml_ext = format!("{ext}.{XML_SUFFIX}");
        for xml in ctx.fs().walk_by_extension(root, &xml_ext)? {
            let binary = xml.with_extension("");
            if preview {
                ctx.output().line(format_args!(
                    "{} will be restored to {}",
                    relative(root, &xml),
                    relative(root, &binary)
                ))?;
            } else {
                restore_file(ctx.fs(), &xml, &binary, level)?;
            }
            count += 1;
        }
    }
    if !preview {
        info!(count, "restored project files");
    }
    Ok(count)
}

fn extract_file(fs: &dyn FileSystem, file: &Path, xml: &Path) -> MppmResult<()> {
    debug!(file = %file.display(), "extracting");
    let gz = with_suffix(file, GZ_SUFFIX);
    fs.copy(file, &gz)?;
    let result = gunzip(fs, &gz, xml);
    fs.remove(&gz)?;
    if result.is_err() && fs.exists(xml) {
        fs.remove(xml)?;
    }
    result
}

fn gunzip(fs: &dyn FileSystem, from: &Path, to: &Path) -> MppmResult<()> {
    let mut decoder = GzDecoder::new(fs.open(from)?);
    let mut writer = fs.create(to)?;
    std::io::copy(&mut decoder, &mut writer).map_err(|e| FsError::io(from, e))?;
    writer.flush().map_err(|e| FsError::io(to, e))?;
    Ok(())
}

fn restore_file(
    fs: &dyn FileSystem,
    xml: &Path,
    binary: &Path,
    level: Compression,
) -> MppmResult<()> {
    debug!(file = %xml.display(), "restoring");
    let temp = with_suffix(binary, TEMP_SUFFIX);
    {
        let mut reader = fs.open(xml)?;
        let mut encoder = GzEncoder::new(fs.create(&temp)?, level);
        std::io::copy(&mut reader, &mut encoder).map_err(|e| FsError::io(xml, e))?;
        let mut writer = encoder.finish().map_err(|e| FsError::io(&temp, e))?;
        writer.flush().map_err(|e| FsError::io(&temp, e))?;
    }
    fs.rename(&temp, binary)
}
