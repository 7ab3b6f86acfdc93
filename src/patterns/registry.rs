// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Static registry of supported applications.
//!
//! ```text
//! Ableton  10 11 [12]   gitignore Backup/ *.asd
//!                       lfs       *.als *.alc *.adg *.adv *.agr *.alp *.amxd
//!                       xml.gz    als alc adg adv agr
//! Reaper   6 [7]        gitignore *.rpp-bak *.RPP-bak *.reapeaks
//!                       lfs       *.rpp-undo
//! ```
//!
//! `[x]` marks the default version.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::{FilePatternsConfig, union_all};
use crate::config::MppmConfigInfo;
use crate::error::{ConfigError, MppmResult};

/// A supported application and its per-version file patterns.
#[derive(Debug)]
pub struct ApplicationInfo {
    name: &'static str,
    versions: Vec<&'static str>,
    default_version: &'static str,
    patterns: BTreeMap<&'static str, FilePatternsConfig>,
}

impl ApplicationInfo {
    fn new(
        name: &'static str,
        versions: &[&'static str],
        default_version: &'static str,
        patterns_for: impl Fn(&str) -> FilePatternsConfig,
    ) -> Self {
        Self {
            name,
            versions: versions.to_vec(),
            default_version,
            patterns: versions.iter().map(|v| (*v, patterns_for(v))).collect(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn versions(&self) -> &[&'static str] {
        &self.versions
    }

    #[must_use]
    pub const fn default_version(&self) -> &'static str {
        self.default_version
    }

    #[must_use]
    pub fn supports(&self, version: &str) -> bool {
        self.patterns.contains_key(version)
    }

    #[must_use]
    pub fn patterns(&self, version: &str) -> Option<&FilePatternsConfig> {
        self.patterns.get(version)
    }

    /// `Ableton: 10, 11, 12 (default 12)`
    #[must_use]
    pub fn supported_line(&self) -> String {
        format!(
            "{}: {} (default {})",
            self.name,
            self.versions.join(", "),
            self.default_version
        )
    }
}

fn ableton(version: &str) -> FilePatternsConfig {
    FilePatternsConfig::new(format!("Ableton {version}"))
        .with_gitignore(["Backup/", "*.asd"])
        .with_lfs_track([
            "*.als", "*.alc", "*.adg", "*.adv", "*.agr", "*.alp", "*.amxd",
        ])
        .with_gzipped_xml(["als", "alc", "adg", "adv", "agr"])
}

fn reaper(version: &str) -> FilePatternsConfig {
    FilePatternsConfig::new(format!("Reaper {version}"))
        .with_gitignore(["*.rpp-bak", "*.RPP-bak", "*.reapeaks"])
        .with_lfs_track(["*.rpp-undo"])
}

/// All registered applications, in display order.
pub fn applications() -> &'static [ApplicationInfo] {
    static APPLICATIONS: OnceLock<Vec<ApplicationInfo>> = OnceLock::new();
    APPLICATIONS.get_or_init(|| {
        vec![
            ApplicationInfo::new("Ableton", &["10", "11", "12"], "12", ableton),
            ApplicationInfo::new("Reaper", &["6", "7"], "7", reaper),
        ]
    })
}

/// Configs applied to every project regardless of application.
pub fn general_configs() -> &'static [FilePatternsConfig] {
    static GENERAL: OnceLock<Vec<FilePatternsConfig>> = OnceLock::new();
    GENERAL.get_or_init(|| {
        vec![
            FilePatternsConfig::new("Audio").with_lfs_track([
                "*.wav", "*.aif", "*.aiff", "*.flac", "*.mp3", "*.ogg", "*.m4a",
            ]),
            FilePatternsConfig::new("Video").with_lfs_track(["*.mp4", "*.mov", "*.avi"]),
            FilePatternsConfig::new("System").with_gitignore([
                ".DS_Store",
                "Thumbs.db",
                "desktop.ini",
            ]),
        ]
    })
}

/// Look up an application by name, ignoring ASCII case.
#[must_use]
pub fn find_application(name: &str) -> Option<&'static ApplicationInfo> {
    applications()
        .iter()
        .find(|app| app.name.eq_ignore_ascii_case(name))
}

/// Patterns for one application version.
///
/// # Errors
///
/// Returns `ConfigError::UnknownApplication` if the name or version is not
/// registered.
pub fn application_patterns(name: &str, version: &str) -> MppmResult<&'static FilePatternsConfig> {
    find_application(name)
        .and_then(|app| app.patterns(version))
        .ok_or_else(|| {
            ConfigError::UnknownApplication {
                name: name.to_string(),
                version: version.to_string(),
            }
            .into()
        })
}

/// General configs followed by every registered application version.
#[must_use]
pub fn file_patterns_config_list() -> Vec<&'static FilePatternsConfig> {
    general_configs()
        .iter()
        .chain(applications().iter().flat_map(|app| app.patterns.values()))
        .collect()
}

/// Everything that applies to a project: the general configs plus the
/// configs of the applications it lists.
///
/// # Errors
///
/// Returns `ConfigError::UnknownApplication` if the project lists an
/// unregistered application or version.
pub fn all_file_patterns_from_project_config(
    project: &MppmConfigInfo,
) -> MppmResult<FilePatternsConfig> {
    let selected = project
        .applications
        .iter()
        .map(|app| application_patterns(&app.name, &app.version))
        .collect::<MppmResult<Vec<_>>>()?;
    Ok(union_all(general_configs().iter().chain(selected)))
}
