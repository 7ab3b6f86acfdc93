// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell delegate.
//!
//! ```text
//! GitManager --> dyn Shell --> SystemShell --> git / git-lfs
//!                   \
//!                    +-------> RecordingShell (tests)
//! ```
//!
//! Every invocation blocks until the child exits. Stdout and stderr are
//! captured and returned together.

use std::process::Command;
use tracing::{debug, trace};

use crate::error::{MppmResult, ProcessError};

/// Runs external programs.
pub trait Shell {
    /// Run `program` with `args` and return its combined output.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the program cannot be found or spawned, or
    /// exits with a non-zero status. The captured output is carried in the
    /// error.
    fn execute(&self, program: &str, args: &[String]) -> MppmResult<String>;
}

/// Shell delegate backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn execute(&self, program: &str, args: &[String]) -> MppmResult<String> {
        let command_line = command_line(program, args);
        let resolved = which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
            name: program.to_string(),
        })?;

        debug!(cmd = %command_line, "exec");

        let output = Command::new(&resolved)
            .args(args)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim_end().to_string();

        if !output.status.success() {
            return Err(ProcessError::NonZeroExit {
                command: command_line,
                code: output.status.code().unwrap_or(-1),
                output: combined,
            }
            .into());
        }

        trace!(cmd = %command_line, bytes = combined.len(), "exited");
        Ok(combined)
    }
}

/// Render a command line for logs and error messages.
#[must_use]
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}
