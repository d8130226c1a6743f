// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envinject.

use std::io::Write;
use std::path::Path;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use crate::error::Result;

/// Builds the loader for the given global options.
///
/// # Errors
///
/// Returns an error if a `--set` override is malformed.
pub fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        let dir = global.app_dir.as_deref().unwrap_or_else(|| Path::new("."));
        loader = loader.optional_file(dir.join(CONFIG_FILE_NAME));
    }
    for path in &global.configs {
        loader = loader.file(path);
    }
    loader = loader.env(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set(&option)?;
    }
    Ok(loader)
}

/// Loads and validates the configuration.
///
/// # Errors
///
/// Returns an error if any source is invalid.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?.build()
}

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_options_command(config: &Config, out: &mut impl Write) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Lists the configuration layers, lowest precedence first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_configs_command(loader: &ConfigLoader, out: &mut impl Write) -> Result<()> {
    if loader.present_files().is_empty() {
        writeln!(out, "No configuration files loaded")?;
    }
    for (i, layer) in loader.layers().iter().enumerate() {
        writeln!(out, "{}. {layer}", i + 1)?;
    }
    Ok(())
}
