// mppm: Music Production Project Manager
//
// SPDX-FileCopyrightText: 2026 mppm contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use mppm::cli::library::LibrarySubcommand;
use mppm::cli::project::ProjectSubcommand;
use mppm::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Root flags
// =============================================================================

#[test]
fn cli_show_supported_alone() {
    let cli = Cli::try_parse_from(["mppm", "--show-supported"]).unwrap();
    assert!(cli.show_supported);
    assert!(cli.command.is_none());
}

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "mppm",
        "-l",
        "5",
        "--file-log-level",
        "6",
        "--settings",
        "a.toml",
        "--settings",
        "b.toml",
        "library",
        "list",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.file_log_level, Some(6));
    assert_eq!(
        cli.global.settings,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(
        cli.global.to_settings_overrides(),
        [
            ("output_log_level", "5".to_string()),
            ("file_log_level", "6".to_string()),
        ]
    );
}

#[test]
fn cli_no_overrides_by_default() {
    let cli = Cli::try_parse_from(["mppm", "library", "list"]).unwrap();
    assert!(cli.global.to_settings_overrides().is_empty());
}

// =============================================================================
// Init / Git
// =============================================================================

#[test]
fn cli_init_default_version() {
    let cli = Cli::try_parse_from(["mppm", "init", "Reaper"]).unwrap();
    let Some(Command::Init(args)) = cli.command else {
        panic!("expected init");
    };
    assert_eq!(args.application, "Reaper");
    assert_eq!(args.version, None);
    assert!(!args.preview);
}

#[test]
fn cli_init_requires_application() {
    assert!(Cli::try_parse_from(["mppm", "init"]).is_err());
}

#[test]
fn cli_git_hyphenated_first_argument() {
    let cli = Cli::try_parse_from(["mppm", "git", "--no-pager", "diff", "--stat"]).unwrap();
    let Some(Command::Git(args)) = cli.command else {
        panic!("expected git");
    };
    assert_eq!(args.args, ["--no-pager", "diff", "--stat"]);
}

// =============================================================================
// Project / Library
// =============================================================================

#[test]
fn cli_project_subcommands() {
    for (name, preview) in [("extract", false), ("restore", true), ("init", true)] {
        let mut argv = vec!["mppm", "project", name];
        if preview {
            argv.push("--preview");
        }
        let cli = Cli::try_parse_from(argv).unwrap();
        let Some(Command::Project(args)) = cli.command else {
            panic!("expected project");
        };
        let flags = match args.subcommand {
            ProjectSubcommand::Extract(flags)
            | ProjectSubcommand::Restore(flags)
            | ProjectSubcommand::Init(flags) => flags,
        };
        assert_eq!(flags.preview, preview, "{name}");
    }
}

#[test]
fn cli_library_remove_requires_path() {
    assert!(Cli::try_parse_from(["mppm", "library", "remove"]).is_err());
    let cli = Cli::try_parse_from(["mppm", "library", "remove", "/data/drums"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Command::Library(ref args))
            if matches!(args.subcommand, LibrarySubcommand::Remove(ref p) if p.path == PathBuf::from("/data/drums"))
    ));
}

#[test]
fn cli_library_checkout_recent() {
    let cli = Cli::try_parse_from(["mppm", "library", "checkout", "--recent"]).unwrap();
    let Some(Command::Library(args)) = cli.command else {
        panic!("expected library");
    };
    assert!(matches!(
        args.subcommand,
        LibrarySubcommand::Checkout(c) if c.recent && !c.project
    ));
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["mppm", "build"]).is_err());
}
