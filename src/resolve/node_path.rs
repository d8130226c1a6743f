// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module search path normalization.
//!
//! ```text
//! NODE_PATH="src::/opt/lib:../shared"     anchor=/work/app
//!   split   [src, "", /opt/lib, ../shared]
//!   filter  drop "" and /opt/lib (kept in place under AbsoluteEntries::Keep)
//!   resolve src       -> /work/app/src
//!           ../shared -> /work/shared
//!   join    /work/app/src:/work/shared
//! ```
//!
//! Only project-relative directories are honored by default: an absolute
//! entry such as a global `node_modules` could shadow runtime built-ins.
//! Relative entries are resolved lexically: `.` and `..` are collapsed
//! without touching the filesystem.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::env::container::Env;
use crate::error::{FsError, InjectResult};

/// Platform path-list delimiter.
pub const DELIMITER: char = if cfg!(windows) { ';' } else { ':' };

/// What to do with entries that are already absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsoluteEntries {
    /// Discard them so only project-relative directories survive.
    #[default]
    Drop,
    /// Leave them untouched, in place.
    Keep,
}

impl std::fmt::Display for AbsoluteEntries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drop => write!(f, "drop"),
            Self::Keep => write!(f, "keep"),
        }
    }
}

/// Resolves the symlink-free absolute form of the application directory.
///
/// # Errors
///
/// Returns a filesystem error if the directory cannot be canonicalized.
pub fn app_directory(dir: &Path) -> InjectResult<PathBuf> {
    dir.canonicalize()
        .map_err(|e| FsError::from_io(dir, e).into())
}

/// Normalizes a delimiter-joined module search path against `anchor`.
#[must_use]
pub fn normalize_module_path(value: &str, anchor: &Path, policy: AbsoluteEntries) -> String {
    value
        .split(DELIMITER)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let path = Path::new(entry);
            if path.is_absolute() {
                match policy {
                    AbsoluteEntries::Keep => Some(entry.to_string()),
                    AbsoluteEntries::Drop => None,
                }
            } else {
                Some(resolve_against(anchor, path).display().to_string())
            }
        })
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Rewrites `var` in `env` with its normalized value.
///
/// An absent variable is treated as empty and written back as empty.
pub fn compute_paths(env: &mut Env, var: &str, anchor: &Path, policy: AbsoluteEntries) {
    let current = env.get(var).unwrap_or_default();
    let normalized = normalize_module_path(current, anchor, policy);
    debug!(var, value = %normalized, "normalized module search path");
    env.set(var, normalized);
}

/// Joins `relative` onto `anchor`, collapsing `.` and `..` lexically.
fn resolve_against(anchor: &Path, relative: &Path) -> PathBuf {
    let mut resolved = anchor.to_path_buf();
    for component in relative.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(part) => resolved.push(part),
            Component::RootDir | Component::Prefix(_) => resolved.push(component.as_os_str()),
        }
    }
    resolved
}
