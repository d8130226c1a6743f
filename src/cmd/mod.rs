// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> Session::prepare --> cmd::run_* handlers
//!   resolve, node-path, sources, options, configs
//! ```

pub mod config;
pub mod resolve;
pub mod sources;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::dotenv::DotenvyReader;
use crate::error::Result;
use crate::resolve::node_path::app_directory;
use crate::resolve::{ResolvedEnv, Resolver};

/// Everything a command needs before the pipeline runs.
pub struct Session {
    config: Config,
    resolver: Resolver<DotenvyReader>,
    env: Env,
}

impl Session {
    /// Resolves the app directory and applies `--mode` to `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the app directory cannot be canonicalized or the
    /// client settings are unusable.
    pub fn prepare(global: &GlobalOptions, config: Config, cwd: &Path, mut env: Env) -> Result<Self> {
        let app_dir = app_directory(&config.app_dir_or(cwd))?;
        let resolver = Resolver::from_config(&config, app_dir)?;
        if let Some(mode) = &global.mode {
            env.set(config.dotenv.mode_var.clone(), mode.clone());
        }
        Ok(Self {
            config,
            resolver,
            env,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn resolver(&self) -> &Resolver<DotenvyReader> {
        &self.resolver
    }

    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Runs both phases: dotenv loading, then module path normalization.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode is missing or a dotenv file is unreadable.
    pub fn resolve(self) -> Result<ResolvedEnv> {
        Ok(self.resolver.load_environment(self.env)?.compute_paths())
    }
}
