// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered loading of tool configuration.
//!
//! ```text
//! defaults
//!   < envinject.toml      (optional)
//!   < --config FILE ...   (required)
//!   < ENVINJECT_SECTION__KEY
//!   < --set section.key=value
//! ```
//!
//! Layers are recorded in the order they are added and only handed to the
//! `config` crate in [`ConfigLoader::build`], so the `configs` command can
//! list exactly what a build would read.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// One configuration layer, later layers win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLayer {
    /// TOML file; a missing optional file contributes nothing.
    File { path: PathBuf, required: bool },
    /// TOML text.
    Inline(String),
    /// `<prefix>_<SECTION>__<KEY>` process variables.
    Env { prefix: String },
    /// A single `section.key=value` assignment.
    Override { key: String, value: String },
}

impl ConfigLayer {
    /// Parses `section.key=value`. The value may itself contain `=`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` if there is no `=` or the key
    /// is not `section.key`.
    pub fn parse_override(option: &str) -> std::result::Result<Self, ConfigError> {
        let (key, value) = option
            .split_once('=')
            .map(|(key, value)| (key.trim(), value))
            .filter(|(key, _)| {
                key.split_once('.')
                    .is_some_and(|(section, name)| !section.is_empty() && !name.is_empty())
            })
            .ok_or_else(|| ConfigError::InvalidOverride(option.to_string()))?;
        Ok(Self::Override {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path, required } => {
                let state = match (path.is_file(), required) {
                    (true, _) => "",
                    (false, true) => " (missing)",
                    (false, false) => " (not found, skipped)",
                };
                write!(f, "[file] {}{state}", path.display())
            }
            Self::Inline(_) => write!(f, "[inline] <string>"),
            Self::Env { prefix } => write!(f, "[env] {prefix}_<SECTION>__<KEY>"),
            Self::Override { key, value } => write!(f, "[set] {key}={value}"),
        }
    }
}

/// Ordered list of configuration layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    layers: Vec<ConfigLayer>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file that must exist.
    #[must_use]
    pub fn file(self, path: impl AsRef<Path>) -> Self {
        self.layer(ConfigLayer::File {
            path: path.as_ref().to_path_buf(),
            required: true,
        })
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(ConfigLayer::File {
            path: path.as_ref().to_path_buf(),
            required: false,
        })
    }

    #[must_use]
    pub fn inline(self, content: impl Into<String>) -> Self {
        self.layer(ConfigLayer::Inline(content.into()))
    }

    /// Reads `<prefix>_<SECTION>__<KEY>` variables at build time.
    #[must_use]
    pub fn env(self, prefix: impl Into<String>) -> Self {
        self.layer(ConfigLayer::Env {
            prefix: prefix.into(),
        })
    }

    /// Adds a `section.key=value` override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` for a malformed option.
    pub fn set(self, option: &str) -> std::result::Result<Self, ConfigError> {
        Ok(self.layer(ConfigLayer::parse_override(option)?))
    }

    #[must_use]
    pub fn layer(mut self, layer: ConfigLayer) -> Self {
        self.layers.push(layer);
        self
    }

    #[must_use]
    pub fn layers(&self) -> &[ConfigLayer] {
        &self.layers
    }

    /// Files that exist and will contribute to the build.
    #[must_use]
    pub fn present_files(&self) -> Vec<&Path> {
        self.layers
            .iter()
            .filter_map(|layer| match layer {
                ConfigLayer::File { path, .. } if path.is_file() => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    /// Merges every layer over the defaults and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, the merged values do not fit [`Config`], or validation fails.
    pub fn build(&self) -> Result<Config> {
        let mut builder = config::Config::builder();
        for layer in &self.layers {
            builder = match layer {
                ConfigLayer::File { path, required } => builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(*required),
                ),
                ConfigLayer::Inline(content) => {
                    builder.add_source(File::from_str(content, FileFormat::Toml))
                }
                ConfigLayer::Env { prefix } => builder.add_source(
                    Environment::with_prefix(prefix)
                        .prefix_separator("_")
                        .separator("__"),
                ),
                ConfigLayer::Override { key, value } => {
                    builder.set_override(key.as_str(), value.as_str())?
                }
            };
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
