// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations.
//!
//! ```text
//!    library / project / hooks
//!               |
//!               v
//!     GitManager (manager.rs)
//!     init add commit checkout
//!     rev-parse status lfs run
//!               |
//!               v
//!     dyn Shell --> git -C <repo> ...
//! ```
//!
//! All git access goes through the CLI. Working-tree side effects of
//! `mppm git` are handled by the hooks in `hooks.rs`.

pub mod hooks;
pub mod manager;


pub use manager::{DEFAULT_BRANCH, GitManager};
