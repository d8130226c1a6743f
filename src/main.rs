// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Session --> Command Dispatch
//!   Resolve | NodePath | Sources | Options | Configs | Version
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use envinject::cli::global::GlobalOptions;
use envinject::cli::{self, Command};
use envinject::cmd::Session;
use envinject::cmd::config::{
    build_config_loader, load_config, run_configs_command, run_options_command,
};
use envinject::cmd::resolve::{run_node_path_command, run_resolve_command};
use envinject::cmd::sources::run_sources_command;
use envinject::core::env::current_env;
use envinject::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    LogConfig::builder()
        .console_level(global.log_level.unwrap_or_default())
        .maybe_file_level(global.file_log_level)
        .maybe_log_file(global.log_file.clone())
        .maybe_filter(global.log_filter.clone())
        .json(global.log_json)
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION")).map_err(Into::into)
        }
        Some(Command::Options) => {
            load_config(&cli.global).and_then(|config| run_options_command(&config, &mut out))
        }
        Some(Command::Configs) => build_config_loader(&cli.global)
            .and_then(|loader| run_configs_command(&loader, &mut out)),
        Some(Command::Sources) => open_session(&cli.global)
            .and_then(|session| run_sources_command(&session, &mut out)),
        Some(Command::NodePath) => open_session(&cli.global)
            .and_then(Session::resolve)
            .and_then(|resolved| run_node_path_command(&resolved, &mut out)),
        Some(Command::Resolve(args)) => open_session(&cli.global).and_then(|session| {
            let config = session.config().clone();
            let resolved = session.resolve()?;
            run_resolve_command(args, &config, &resolved, &mut out)
        }),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn open_session(global: &GlobalOptions) -> envinject::error::Result<Session> {
    let config = load_config(global)?;
    let cwd = std::env::current_dir()?;
    Session::prepare(global, config, &cwd, current_env())
}
