// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envinject.
//!
//! This configures the tool itself. The variables being resolved come from
//! the process environment and the dotenv files, never from here.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envinject.toml (app dir, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVINJECT_* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVINJECT_DOTENV__BASE=config/.env        → dotenv.base
//! ENVINJECT_CLIENT__NAMESPACE_PREFIX=VITE_  → client.namespace_prefix
//! ENVINJECT_MODULE_PATH__ABSOLUTE_ENTRIES=drop
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{ClientConfig, DotenvConfig, ModulePathConfig, PathsConfig};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "envinject.toml";

/// Prefix of environment variables overriding configuration.
pub const ENV_PREFIX: &str = "ENVINJECT";

/// Complete tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Application directory.
    pub paths: PathsConfig,
    /// Dotenv sources.
    pub dotenv: DotenvConfig,
    /// Module search path normalization.
    pub module_path: ModulePathConfig,
    /// Client projection.
    pub client: ClientConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envinject::config::Config;
    ///
    /// let config = Config::builder()
    ///     .optional_file("envinject.toml")
    ///     .env("ENVINJECT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().inline(content).build()
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for empty variable or key names
    /// and for an unusable namespace prefix.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let required = [
            ("dotenv", "mode_var", &self.dotenv.mode_var),
            ("module_path", "var", &self.module_path.var),
            ("client", "mode_key", &self.client.mode_key),
            ("client", "public_url_key", &self.client.public_url_key),
            ("client", "define_key", &self.client.define_key),
        ];
        for (section, key, value) in required {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: section.to_string(),
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if self.dotenv.base.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "dotenv".to_string(),
                key: "base".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        self.client.projector_options()?;
        Ok(())
    }

    /// Application directory, falling back to `cwd`.
    #[must_use]
    pub fn app_dir_or(&self, cwd: &Path) -> PathBuf {
        self.paths
            .app_dir
            .as_ref()
            .map_or_else(|| cwd.to_path_buf(), |dir| cwd.join(dir))
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_paths_options(&mut options);
        self.format_dotenv_options(&mut options);
        self.format_module_path_options(&mut options);
        self.format_client_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "paths.app_dir".into(),
            self.paths
                .app_dir
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_dotenv_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "dotenv.base".into(),
            self.dotenv.base.display().to_string(),
        );
        options.insert("dotenv.mode_var".into(), self.dotenv.mode_var.clone());
    }

    fn format_module_path_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("module_path.var".into(), self.module_path.var.clone());
        options.insert(
            "module_path.absolute_entries".into(),
            self.module_path.absolute_entries.to_string(),
        );
    }

    fn format_client_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "client.namespace_prefix".into(),
            self.client.namespace_prefix.clone(),
        );
        options.insert("client.mode_key".into(), self.client.mode_key.clone());
        options.insert(
            "client.default_mode".into(),
            self.client.default_mode.clone(),
        );
        options.insert(
            "client.public_url_key".into(),
            self.client.public_url_key.clone(),
        );
        options.insert("client.define_key".into(), self.client.define_key.clone());
        options.insert("client.public_url".into(), self.client.public_url.clone());
    }
}
