// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment resolution pipeline.
//!
//! # Phases
//!
//! ```text
//! Resolver ──load_environment(env)──> LoadedEnv ──compute_paths()──> ResolvedEnv
//!    |                                   |                              |
//!  Mode::from_env                 NODE_PATH rewritten          client_environment(url)
//!  dotenv files merged            against app dir                  -> ClientEnvironment
//! ```
//!
//! Each phase consumes the previous one, so the dotenv files are always
//! merged before the module path is normalized, and both happen before any
//! projection reads the environment.

pub mod client;
pub mod mode;
pub mod node_path;
pub mod sources;


use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::info;

use crate::config::Config;
use crate::core::env::container::Env;
use crate::dotenv::{DotenvSource, DotenvyReader};
use crate::error::{ConfigError, InjectResult};
use client::{ClientEnvironment, ProjectorOptions};
use mode::Mode;
use node_path::AbsoluteEntries;

/// Entry point of the pipeline, holding everything but the environment.
#[derive(Debug, Clone, Builder)]
pub struct Resolver<R> {
    reader: R,
    /// Canonical application directory.
    #[builder(into)]
    app_dir: PathBuf,
    /// Dotenv base name, relative to `app_dir` unless absolute.
    #[builder(into, default = PathBuf::from(".env"))]
    dotenv_base: PathBuf,
    #[builder(into, default = "NODE_ENV".to_string())]
    mode_var: String,
    #[builder(into, default = "NODE_PATH".to_string())]
    module_path_var: String,
    #[builder(default)]
    absolute_entries: AbsoluteEntries,
    projector: ProjectorOptions,
}

impl Resolver<DotenvyReader> {
    /// Builds a resolver from tool configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured namespace prefix is unusable.
    pub fn from_config(config: &Config, app_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self::builder()
            .reader(DotenvyReader::new())
            .app_dir(app_dir)
            .dotenv_base(config.dotenv.base.clone())
            .mode_var(config.dotenv.mode_var.clone())
            .module_path_var(config.module_path.var.clone())
            .absolute_entries(config.module_path.absolute_entries)
            .projector(config.client.projector_options()?)
            .build())
    }
}

impl<R: DotenvSource> Resolver<R> {
    #[must_use]
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    /// Absolute dotenv base path.
    #[must_use]
    pub fn dotenv_base(&self) -> PathBuf {
        self.app_dir.join(&self.dotenv_base)
    }

    #[must_use]
    pub fn mode_var(&self) -> &str {
        &self.mode_var
    }

    /// Reads the mode from `env` without loading anything.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingMode` if the mode variable is absent or empty.
    pub fn mode(&self, env: &Env) -> Result<Mode, ConfigError> {
        Mode::from_env(env, &self.mode_var)
    }

    /// Candidate dotenv files for `mode`, highest precedence first.
    #[must_use]
    pub fn candidate_files(&self, mode: &Mode) -> Vec<PathBuf> {
        sources::candidate_files(&self.dotenv_base(), mode)
    }

    /// Every dotenv layer for `mode`, including ones the mode skips.
    #[must_use]
    pub fn dotenv_layers(&self, mode: &Mode) -> [sources::DotenvLayer; 4] {
        sources::dotenv_layers(&self.dotenv_base(), mode)
    }

    /// Phase one: requires the mode and merges the dotenv files into `env`.
    ///
    /// # Errors
    ///
    /// Fails before touching any file if the mode is missing, otherwise
    /// with the first read or parse error.
    pub fn load_environment(self, mut env: Env) -> InjectResult<LoadedEnv<R>> {
        let mode = self.mode(&env)?;
        let files = sources::load_environment(&mut env, &self.reader, &self.dotenv_base(), &mode)?;
        info!(mode = %mode, files = files.len(), "loaded environment");
        Ok(LoadedEnv {
            resolver: self,
            env,
            mode,
            files,
        })
    }
}

/// Environment after the dotenv files have been merged.
#[derive(Debug, Clone)]
pub struct LoadedEnv<R> {
    resolver: Resolver<R>,
    env: Env,
    mode: Mode,
    files: Vec<PathBuf>,
}

impl<R> LoadedEnv<R> {
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Dotenv files that were present and applied, in order.
    #[must_use]
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Phase two: rewrites the module search path against the app directory.
    #[must_use]
    pub fn compute_paths(mut self) -> ResolvedEnv {
        let resolver = self.resolver;
        node_path::compute_paths(
            &mut self.env,
            &resolver.module_path_var,
            &resolver.app_dir,
            resolver.absolute_entries,
        );
        ResolvedEnv {
            env: self.env,
            mode: self.mode,
            files: self.files,
            module_path_var: resolver.module_path_var,
            projector: resolver.projector,
        }
    }
}

/// Fully settled environment, ready for projection.
#[derive(Debug, Clone)]
pub struct ResolvedEnv {
    env: Env,
    mode: Mode,
    files: Vec<PathBuf>,
    module_path_var: String,
    projector: ProjectorOptions,
}

impl ResolvedEnv {
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.files
    }

    /// The normalized module search path.
    #[must_use]
    pub fn module_path(&self) -> &str {
        self.env.get(&self.module_path_var).unwrap_or_default()
    }

    /// Builds the client snapshot for `public_url`.
    #[must_use]
    pub fn client_environment(&self, public_url: &str) -> ClientEnvironment {
        client::project(&self.env, public_url, &self.projector)
    }

    #[must_use]
    pub fn into_env(self) -> Env {
        self.env
    }
}
