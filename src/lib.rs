// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          init / git / project / library
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |  config (ConfigManager)   |
//!              |  project + global JSON    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             patterns     project   library
//!             registry    init/.git  snapshots
//!                 |           |        |
//!                 v           v        v
//!              extract      git (manager, hooks)
//!             flate2 gz          |
//!                 |              |
//!   +-------------+--------------+-------------+
//!   |  context   dyn Shell / dyn FileSystem /  |
//!   |            Output / working dir          |
//!   +------------------------------------------+
//!   |  foundation   error, logging, settings   |
//!   +------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod fs;
pub mod git;
pub mod library;
pub mod logging;
pub mod patterns;
pub mod project;
pub mod settings;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;
