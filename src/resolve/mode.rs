// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build mode label.

use std::fmt;

use crate::core::env::container::Env;
use crate::error::ConfigError;

/// The build profile label (`development`, `production`, `test`, ...).
///
/// Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mode(String);

impl Mode {
    /// Literal mode under which local overrides are ignored.
    pub const TEST: &'static str = "test";

    /// Creates a mode from a label.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingMode` if the label is empty.
    pub fn new(label: impl Into<String>, var: &str) -> Result<Self, ConfigError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ConfigError::MissingMode {
                var: var.to_string(),
            });
        }
        Ok(Self(label))
    }

    /// Reads the mode from `var` in the given environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingMode` if the variable is absent or empty.
    pub fn from_env(env: &Env, var: &str) -> Result<Self, ConfigError> {
        Self::new(env.get(var).unwrap_or_default(), var)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `test` mode.
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.0 == Self::TEST
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
