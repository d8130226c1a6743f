// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::resolve::OutputFormat;
use crate::cli::{Cli, Command};
use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envinject", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envinject",
        "-l",
        "trace",
        "-C",
        "/srv/web",
        "--mode",
        "production",
        "-s",
        "client.namespace_prefix=VITE_",
        "node-path",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(LogLevel::Trace));
    assert_eq!(cli.global.app_dir, Some(PathBuf::from("/srv/web")));
    assert_eq!(cli.global.mode.as_deref(), Some("production"));
    assert!(matches!(cli.command, Some(Command::NodePath)));
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![
            "client.namespace_prefix=VITE_".to_string(),
            "paths.app_dir=/srv/web".to_string(),
        ]
    );
}

#[test]
fn test_parse_resolve_defaults() {
    let cli = Cli::try_parse_from(["envinject", "resolve"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.public_url, None);
}

#[test]
fn test_parse_resolve_format_define() {
    let cli = Cli::try_parse_from(["envinject", "resolve", "-f", "define", "-u", "/app"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.format, OutputFormat::Define);
    assert_eq!(args.public_url.as_deref(), Some("/app"));
}

#[test]
fn test_public_url_conflicts_with_public_path() {
    let result = Cli::try_parse_from([
        "envinject",
        "resolve",
        "--public-url",
        "/a",
        "--public-path",
        "/b/",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_log_level_by_name() {
    let cli = Cli::try_parse_from(["envinject", "--file-log-level", "DEBUG", "sources"]).unwrap();
    assert_eq!(cli.global.file_log_level, Some(LogLevel::Debug));
    assert!(Cli::try_parse_from(["envinject", "-l", "7", "sources"]).is_err());
}
