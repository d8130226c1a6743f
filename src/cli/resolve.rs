// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `resolve` command.
//!
//! ```text
//! envinject resolve [--public-url URL | --public-path PATH] [--format FMT]
//! json   → {"raw": {...}, "stringified": {"process.env": {...}}}
//! raw    → KEY=value lines
//! define → {"process.env.KEY": "\"value\"", ...}
//! ```

use clap::{Args, ValueEnum};

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Public URL exposed as PUBLIC_URL, used verbatim.
    #[arg(short = 'u', long = "public-url", value_name = "URL", conflicts_with = "public_path")]
    pub public_url: Option<String>,

    /// Served public path; one trailing slash is removed to form PUBLIC_URL.
    #[arg(short = 'p', long = "public-path", value_name = "PATH")]
    pub public_path: Option<String>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Output format of the `resolve` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Full snapshot with `raw` and `stringified`.
    #[default]
    Json,
    /// `KEY=value` lines of the raw mapping.
    Raw,
    /// Flat define map, `group.KEY` to JSON literal.
    Define,
}
