// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Context --> Command Dispatch
//!   Init | Git | Project | Library | --show-supported
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use mppm::cli::global::GlobalOptions;
use mppm::cli::{self, Cli, Command};
use mppm::cmd::git::run_git_command;
use mppm::cmd::init::run_init_command;
use mppm::cmd::library::run_library_command;
use mppm::cmd::project::run_project_command;
use mppm::config::ConfigManager;
use mppm::context::Context;
use mppm::error::Result;
use mppm::logging::init_logging;
use mppm::project::show_supported;
use mppm::settings::{Settings, SettingsLoader, default_settings_path};

use mimalloc::MiMalloc;
use tracing::debug;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let (settings, sources) = match load_settings(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&settings.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            println!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    for source in sources {
        debug!(path = %source.display(), "settings source");
    }

    match dispatch_command(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch_command(cli: &Cli, settings: &Settings) -> Result<()> {
    let ctx = Context::system(settings)?;

    if cli.show_supported {
        show_supported(&ctx)?;
        if cli.command.is_none() {
            return Ok(());
        }
    }

    let mut configs = ConfigManager::new(&ctx);
    match &cli.command {
        Some(Command::Init(args)) => run_init_command(args, &ctx, &mut configs),
        Some(Command::Git(args)) => run_git_command(args, &ctx, &mut configs),
        Some(Command::Project(args)) => run_project_command(args, &ctx, &mut configs),
        Some(Command::Library(args)) => run_library_command(args, &ctx, &mut configs),
        None => Err(anyhow::anyhow!(
            "no command specified, use --help for usage information"
        )),
    }
}

/// Settings plus a description of every file they were read from.
fn load_settings(global: &GlobalOptions) -> Result<(Settings, Vec<PathBuf>)> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = default_settings_path() {
        loader = loader.add_toml_file_optional(path);
    }
    for path in &global.settings {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("MPPM");
    for (key, value) in global.to_settings_overrides() {
        loader = loader.set(key, value)?;
    }
    let sources = loader.sources().to_vec();
    Ok((loader.build()?, sources))
}
