// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envinject using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envinject [global options] <command>
//! resolve [--public-url URL] [--format json|raw|define]
//! sources
//! node-path
//! options
//! configs
//! version
//! ```

pub mod global;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::resolve::ResolveArgs;
use clap::{Parser, Subcommand};

/// Build-time environment resolver.
///
/// Merges layered `.env` files into the environment and prints the
/// variables a front-end bundle may see.
#[derive(Debug, Parser)]
#[command(
    name = "envinject",
    author,
    version,
    about = "Build-time environment resolver",
    long_about = "envinject Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves the environment of a front-end build: layered .env\n\
                  files are merged under the variables already set, NODE_PATH is\n\
                  made absolute, and the REACT_APP_* variables are printed ready\n\
                  for a define-style substitution.",
    after_help = "DOTENV FILES:\n\n\
                  Files are read from the app directory, highest precedence first:\n\
                  .env.<mode>.local, .env.<mode>, .env.local, .env. The .env.local\n\
                  file is ignored when the mode is `test`. A variable that is\n\
                  already set is never overwritten, neither by a file nor by a\n\
                  lower-precedence file. The mode is read from NODE_ENV and is\n\
                  required."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Resolves the environment and prints the client snapshot.
    Resolve(ResolveArgs),

    /// Lists the candidate dotenv files for the current mode.
    Sources,

    /// Prints the normalized module search path.
    #[command(name = "node-path")]
    NodePath,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used by envinject.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
