// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv file reading.
//!
//! ```text
//! DotenvSource::read(path, context)
//!   missing file  --> Ok(None)
//!   present file  --> Ok(Some(KEY -> VALUE))
//!   unreadable    --> Err(DotenvError::Read)
//!   bad syntax    --> Err(DotenvError::Parse { index })
//! ```
//!
//! The loader only decides *which* files apply and in what order; the
//! line format and `${VAR}` expansion belong to the reader. Expansion is
//! resolved against the context passed in, which by then holds the
//! ambient variables and every higher-precedence file.


use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use tracing::trace;

use crate::core::env::container::Env;
use crate::error::{DotenvError, InjectResult};

/// A source of `KEY=VALUE` mappings keyed by file path.
pub trait DotenvSource {
    /// Reads the mapping stored at `path`, expanding references against
    /// `context`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn read(&self, path: &Path, context: &Env)
    -> InjectResult<Option<BTreeMap<String, String>>>;
}

/// Reader backed by the `dotenvy` parser.
///
/// Supports quoting, comments, `export` prefixes and `$VAR` / `${VAR}`
/// expansion. A reference resolves to the context value, then to a key
/// defined earlier in the same file. When a key repeats inside one file,
/// the last definition wins.
///
/// `dotenvy` consults the host process environment before anything else,
/// so a name that is also set on the host expands to the host value. The
/// context is captured from the host, so the two only disagree for
/// variables rewritten after start-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotenvyReader;

impl DotenvyReader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DotenvSource for DotenvyReader {
    fn read(
        &self,
        path: &Path,
        context: &Env,
    ) -> InjectResult<Option<BTreeMap<String, String>>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!(path = %path.display(), "dotenv file not present");
                return Ok(None);
            }
            Err(e) => return Err(DotenvError::from_dotenvy(path, dotenvy::Error::Io(e)).into()),
        };
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        // Context entries go first as fully escaped lines, so `dotenvy` can
        // substitute them; their own items are skipped below.
        let (mut input, seeded) = context_lines(context);
        input.push_str(content);
        trace!(path = %path.display(), seeded, "parsing dotenv file");

        let mut vars = BTreeMap::new();
        for item in dotenvy::from_read_iter(input.as_bytes()).skip(seeded) {
            let (key, value) = item.map_err(|e| DotenvError::from_dotenvy(path, e))?;
            vars.insert(key, value);
        }
        Ok(Some(vars))
    }
}

impl<T: DotenvSource + ?Sized> DotenvSource for &T {
    fn read(
        &self,
        path: &Path,
        context: &Env,
    ) -> InjectResult<Option<BTreeMap<String, String>>> {
        (**self).read(path, context)
    }
}

/// Renders every context entry a dotenv file could define as a
/// double-quoted `KEY="value"` line with nothing left to expand.
fn context_lines(context: &Env) -> (String, usize) {
    let mut lines = String::new();
    let mut count = 0;
    for (key, value) in context.iter().filter(|(key, _)| is_dotenv_key(key)) {
        lines.push_str(key);
        lines.push_str("=\"");
        for c in value.chars() {
            match c {
                '\\' | '"' | '$' => {
                    lines.push('\\');
                    lines.push(c);
                }
                '\n' => lines.push_str("\\n"),
                _ => lines.push(c),
            }
        }
        lines.push_str("\"\n");
        count += 1;
    }
    (lines, count)
}

fn is_dotenv_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
