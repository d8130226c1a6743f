// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics for a resolver run.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! stderr     file (optional, non_blocking)
//! text|json  plain text
//!        |
//!        v
//!    LogGuard (flush on drop)
//! ```
//!
//! stdout is reserved for command output that gets piped into a bundler,
//! so every console event goes to stderr. What each level shows:
//!
//! | level   | events                                         |
//! |---------|------------------------------------------------|
//! | `warn`  | nothing unless something is off (default)      |
//! | `debug` | applied dotenv files, normalized module path    |
//! | `trace` | missing files, keys kept from a higher layer    |
//!
//! A `--log-filter` directive (or `RUST_LOG`) replaces the console level
//! with a full `EnvFilter` expression.

use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use clap::ValueEnum;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Verbosity of one log destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, Default, Builder)]
pub struct LogConfig {
    #[builder(default)]
    console_level: LogLevel,
    /// Level of the log file; the console level when unset.
    file_level: Option<LogLevel>,
    #[builder(into)]
    log_file: Option<PathBuf>,
    /// `EnvFilter` expression overriding `console_level`.
    #[builder(into)]
    filter: Option<String>,
    #[builder(default)]
    json: bool,
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub fn file_level(&self) -> LogLevel {
        self.file_level.unwrap_or(self.console_level)
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Filter for the console layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter expression does not parse.
    pub fn console_filter(&self) -> Result<EnvFilter> {
        match &self.filter {
            Some(directives) => EnvFilter::try_new(directives)
                .with_context(|| format!("invalid log filter '{directives}'")),
            None => Ok(EnvFilter::new(self.console_level.directive())),
        }
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be
/// created, or a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_filter = config.console_filter()?;
    let (text_layer, json_layer) = if config.json() {
        let layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter);
        (None, Some(layer))
    } else {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(std::io::stderr().is_terminal())
            .with_filter(console_filter);
        (Some(layer), None)
    };

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(create_log_file(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(config.file_level().directive()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(text_layer)
        .with(json_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn create_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("failed to create log file {}", path.display()))
}

#[cfg(test)]
mod tests;
