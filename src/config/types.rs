// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [paths]        app_dir
//! [dotenv]       base, mode_var
//! [module_path]  var, absolute_entries (drop | keep)
//! [client]       namespace_prefix, mode_key, default_mode,
//!                public_url_key, define_key, public_url
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::resolve::client::{Namespace, ProjectorOptions};
use crate::resolve::node_path::AbsoluteEntries;

/// Application directory settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Application root (default: current directory). Symlinks are resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_dir: Option<PathBuf>,
}

/// Dotenv source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DotenvConfig {
    /// Base file name, relative to the app directory.
    pub base: PathBuf,
    /// Variable holding the build mode.
    pub mode_var: String,
}

impl Default for DotenvConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from(".env"),
            mode_var: "NODE_ENV".to_string(),
        }
    }
}

/// Module search path settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModulePathConfig {
    /// Variable holding the delimiter-joined search path.
    pub var: String,
    /// Whether already-absolute entries survive normalization.
    pub absolute_entries: AbsoluteEntries,
}

impl Default for ModulePathConfig {
    fn default() -> Self {
        Self {
            var: "NODE_PATH".to_string(),
            absolute_entries: AbsoluteEntries::Drop,
        }
    }
}

/// Client projection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Case-insensitive prefix of variables exposed to the client.
    pub namespace_prefix: String,
    /// Key carrying the mode in the snapshot.
    pub mode_key: String,
    /// Mode reported when the mode variable is unset.
    pub default_mode: String,
    /// Key carrying the public URL in the snapshot.
    pub public_url_key: String,
    /// Grouping key of the stringified mapping.
    pub define_key: String,
    /// Public URL used when none is given on the command line.
    pub public_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: Namespace::DEFAULT_PREFIX.to_string(),
            mode_key: "NODE_ENV".to_string(),
            default_mode: "development".to_string(),
            public_url_key: "PUBLIC_URL".to_string(),
            define_key: "process.env".to_string(),
            public_url: String::new(),
        }
    }
}

impl ClientConfig {
    /// Builds projector options from these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the namespace prefix cannot
    /// be compiled.
    pub fn projector_options(&self) -> Result<ProjectorOptions, ConfigError> {
        let namespace =
            Namespace::new(self.namespace_prefix.clone()).map_err(|e| ConfigError::InvalidValue {
                section: "client".to_string(),
                key: "namespace_prefix".to_string(),
                message: e.to_string(),
            })?;

        Ok(ProjectorOptions::builder()
            .namespace(namespace)
            .mode_key(self.mode_key.clone())
            .default_mode(self.default_mode.clone())
            .public_url_key(self.public_url_key.clone())
            .define_key(self.define_key.clone())
            .build())
    }
}
