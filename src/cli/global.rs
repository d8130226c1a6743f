// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --app-dir DIR     ← paths.app_dir override
//! --mode MODE       ← sets the mode variable before loading
//! --log-level LVL   ← Console verbosity (off..trace)
//! --log-filter EXPR ← EnvFilter expression, replaces --log-level
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > ENVINJECT_* > --config > envinject.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Application directory holding the dotenv files (default: current directory).
    #[arg(short = 'C', long = "app-dir", value_name = "DIR")]
    pub app_dir: Option<PathBuf>,

    /// Build mode, takes precedence over the mode variable of the environment.
    #[arg(short = 'm', long = "mode", value_name = "MODE")]
    pub mode: Option<String>,

    /// Console log level.
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_enum, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    /// Console filter such as 'envinject::resolve=trace', replaces --log-level.
    #[arg(long = "log-filter", value_name = "EXPR", env = "RUST_LOG")]
    pub log_filter: Option<String>,

    /// File log level, defaults to --log-level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_enum, ignore_case = true)]
    pub file_log_level: Option<LogLevel>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Writes console logs as JSON lines.
    #[arg(long = "log-json")]
    pub log_json: bool,

    /// Sets an option, such as 'client.namespace_prefix=VITE_'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of envinject.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `section.key=value` overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(ref dir) = self.app_dir {
            overrides.push(format!("paths.app_dir={}", dir.display()));
        }

        overrides
    }
}
