// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client environment projection.
//!
//! ```text
//! seed {NODE_ENV: mode | "development", PUBLIC_URL: public_url}
//!   + every env key matching /^REACT_APP_/i   (folded over the seed)
//!   = raw
//! stringified = {"process.env": {KEY: json(raw[KEY])}}
//! ```
//!
//! Seed keys go in first, so a namespace-matching key with the identical
//! name replaces the computed default.

use std::collections::BTreeMap;

use bon::Builder;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::core::env::container::Env;

/// Case-insensitive key prefix selecting variables exposed to the client.
#[derive(Debug, Clone)]
pub struct Namespace {
    prefix: String,
    pattern: Regex,
}

impl Namespace {
    pub const DEFAULT_PREFIX: &'static str = "REACT_APP_";

    /// Builds a namespace matching keys that start with `prefix`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the compiled pattern exceeds the regex size limit.
    pub fn new(prefix: impl Into<String>) -> Result<Self, regex::Error> {
        let prefix = prefix.into();
        let pattern = RegexBuilder::new(&format!("^{}", regex::escape(&prefix)))
            .case_insensitive(true)
            .build()?;
        Ok(Self { prefix, pattern })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether `key` belongs to this namespace.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }
}

/// Names and defaults used when building a [`ClientEnvironment`].
#[derive(Debug, Clone, Builder)]
pub struct ProjectorOptions {
    namespace: Namespace,
    #[builder(into, default = "NODE_ENV".to_string())]
    mode_key: String,
    #[builder(into, default = "development".to_string())]
    default_mode: String,
    #[builder(into, default = "PUBLIC_URL".to_string())]
    public_url_key: String,
    #[builder(into, default = "process.env".to_string())]
    define_key: String,
}

impl ProjectorOptions {
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    #[must_use]
    pub fn mode_key(&self) -> &str {
        &self.mode_key
    }

    #[must_use]
    pub fn define_key(&self) -> &str {
        &self.define_key
    }
}

/// Snapshot of the variables injected into the client bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientEnvironment {
    /// Plain values.
    pub raw: BTreeMap<String, String>,
    /// The same keys with JSON-encoded values, grouped under one key.
    pub stringified: BTreeMap<String, BTreeMap<String, String>>,
}

impl ClientEnvironment {
    /// The JSON-encoded values, whatever the grouping key is.
    #[must_use]
    pub fn values(&self) -> Option<&BTreeMap<String, String>> {
        self.stringified.values().next()
    }

    /// Flattens `stringified` into `group.KEY = literal` pairs.
    #[must_use]
    pub fn define_entries(&self) -> Vec<(String, String)> {
        self.stringified
            .iter()
            .flat_map(|(group, values)| {
                values
                    .iter()
                    .map(move |(key, literal)| (format!("{group}.{key}"), literal.clone()))
            })
            .collect()
    }
}

/// Builds the client environment from `env`.
#[must_use]
pub fn project(env: &Env, public_url: &str, options: &ProjectorOptions) -> ClientEnvironment {
    let mode = env
        .get(&options.mode_key)
        .filter(|m| !m.is_empty())
        .unwrap_or(&options.default_mode);

    let mut raw = BTreeMap::new();
    raw.insert(options.mode_key.clone(), mode.to_string());
    raw.insert(options.public_url_key.clone(), public_url.to_string());

    raw.extend(
        env.iter()
            .filter(|(key, _)| options.namespace.matches(key))
            .map(|(key, value)| (key.to_string(), value.to_string())),
    );

    let encoded = raw
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::from(value.as_str()).to_string()))
        .collect();

    let mut stringified = BTreeMap::new();
    stringified.insert(options.define_key.clone(), encoded);

    ClientEnvironment { raw, stringified }
}

/// Public URL derived from a served public path: one trailing `/` removed.
#[must_use]
pub fn public_url_from_public_path(public_path: &str) -> &str {
    public_path.strip_suffix('/').unwrap_or(public_path)
}
