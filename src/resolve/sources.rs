// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered dotenv source loading.
//!
//! # Precedence (high → low)
//!
//! ```text
//! 1. <base>.<mode>.local
//! 2. <base>.<mode>
//! 3. <base>.local        (skipped when mode == "test")
//! 4. <base>
//! ```
//!
//! Files are applied in this order and a key is only written when it is
//! still absent, so the first writer wins. Variables already present in
//! the environment before loading always beat every file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::mode::Mode;
use crate::core::env::container::Env;
use crate::dotenv::DotenvSource;
use crate::error::InjectResult;

/// One of the four dotenv layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvLayer {
    pub path: PathBuf,
    /// False only for `<base>.local` in test mode.
    pub applies: bool,
}

/// All four dotenv layers for `mode`, highest precedence first.
#[must_use]
pub fn dotenv_layers(base: &Path, mode: &Mode) -> [DotenvLayer; 4] {
    let layer = |path, applies| DotenvLayer { path, applies };
    [
        layer(with_suffix(base, &format!(".{mode}.local")), true),
        layer(with_suffix(base, &format!(".{mode}")), true),
        layer(with_suffix(base, ".local"), !mode.is_test()),
        layer(base.to_path_buf(), true),
    ]
}

/// Candidate dotenv files for `mode`, highest precedence first.
#[must_use]
pub fn candidate_files(base: &Path, mode: &Mode) -> Vec<PathBuf> {
    dotenv_layers(base, mode)
        .into_iter()
        .filter(|layer| layer.applies)
        .map(|layer| layer.path)
        .collect()
}

/// Merges every present candidate file into `env` without overwriting.
///
/// Each file is read with the current `env` as its expansion context, so a
/// reference can see the ambient variables and every file applied before it.
///
/// Returns the files that existed and were applied, in application order.
///
/// # Errors
///
/// Returns the first read or parse failure. Missing files are skipped.
pub fn load_environment<R: DotenvSource>(
    env: &mut Env,
    reader: &R,
    base: &Path,
    mode: &Mode,
) -> InjectResult<Vec<PathBuf>> {
    let mut applied = Vec::new();

    for path in candidate_files(base, mode) {
        let Some(vars) = reader.read(&path, env)? else {
            continue;
        };

        let mut inserted = 0usize;
        for (key, value) in vars {
            if env.set_if_absent(key.as_str(), value) {
                inserted += 1;
            } else {
                trace!(key = %key, file = %path.display(), "keeping existing value");
            }
        }

        debug!(file = %path.display(), inserted, "applied dotenv file");
        applied.push(path);
    }

    Ok(applied)
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
