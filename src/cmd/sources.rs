// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sources command: which dotenv files apply, without loading them.

use std::io::Write;
use std::path::PathBuf;

use crate::cmd::Session;
use crate::error::Result;

/// State of one dotenv file for the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// Candidate that exists and would be applied.
    Present,
    /// Candidate that does not exist.
    Absent,
    /// Not a candidate in test mode.
    IgnoredInTest,
}

impl SourceStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::IgnoredInTest => "ignored (test mode)",
        }
    }
}

/// Lists the dotenv files for the session's mode in precedence order.
///
/// # Errors
///
/// Returns an error if the mode is missing or a file cannot be checked.
pub fn list_sources(session: &Session) -> Result<Vec<(PathBuf, SourceStatus)>> {
    let resolver = session.resolver();
    let mode = resolver.mode(session.env())?;

    let mut listing = Vec::new();
    for layer in resolver.dotenv_layers(&mode) {
        let status = if !layer.applies {
            SourceStatus::IgnoredInTest
        } else if layer.path.try_exists()? {
            SourceStatus::Present
        } else {
            SourceStatus::Absent
        };
        listing.push((layer.path, status));
    }
    Ok(listing)
}

/// Prints the dotenv files for the current mode.
///
/// # Errors
///
/// Returns an error if the mode is missing, a file cannot be checked, or
/// writing to `out` fails.
pub fn run_sources_command(session: &Session, out: &mut impl Write) -> Result<()> {
    for (i, (path, status)) in list_sources(session)?.iter().enumerate() {
        writeln!(out, "{}. [{}] {}", i + 1, status.as_str(), path.display())?;
    }
    Ok(())
}
