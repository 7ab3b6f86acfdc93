// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> project / library / git::hooks
//!   init, git, project, library
//! ```
//!
//! Handlers never print errors; they return them to `main`.

pub mod git;
pub mod init;
pub mod library;
pub mod project;
