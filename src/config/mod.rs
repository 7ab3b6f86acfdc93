// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project and global configuration.
//!
//! # Document Locations
//!
//! ```text
//! project  <working dir>/.mppm.json   applications + pinned libraries
//! global   <home>/.mppm.json          every tracked library
//! ```
//!
//! Invariants checked on every load:
//! - the document's major version equals the running tool's major version
//! - every listed application name and version is registered

pub mod manager;
pub mod types;


pub use manager::{CONFIG_FILE_NAME, ConfigManager};
pub use types::{ApplicationConfig, LibraryConfig, MppmConfigInfo, TOOL_VERSION};
