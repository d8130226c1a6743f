// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve and node-path commands.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::debug;

use crate::cli::resolve::{OutputFormat, ResolveArgs};
use crate::config::Config;
use crate::error::Result;
use crate::resolve::ResolvedEnv;
use crate::resolve::client::{ClientEnvironment, public_url_from_public_path};

/// Public URL from the arguments, falling back to `client.public_url`.
#[must_use]
pub fn public_url<'a>(args: &'a ResolveArgs, config: &'a Config) -> &'a str {
    match (&args.public_url, &args.public_path) {
        (Some(url), _) => url.as_str(),
        (None, Some(path)) => public_url_from_public_path(path),
        (None, None) => config.client.public_url.as_str(),
    }
}

/// Prints the client snapshot of a resolved environment.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn run_resolve_command(
    args: &ResolveArgs,
    config: &Config,
    resolved: &ResolvedEnv,
    out: &mut impl Write,
) -> Result<()> {
    let url = public_url(args, config);
    let client = resolved.client_environment(url);
    debug!(keys = client.raw.len(), public_url = url, "projected client environment");
    write_client_environment(&client, args.format, out)
}

/// Renders `client` in the requested format.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn write_client_environment(
    client: &ClientEnvironment,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, client)?;
            writeln!(out)?;
        }
        OutputFormat::Raw => {
            for (key, value) in &client.raw {
                writeln!(out, "{key}={value}")?;
            }
        }
        OutputFormat::Define => {
            let defines: BTreeMap<_, _> = client.define_entries().into_iter().collect();
            serde_json::to_writer_pretty(&mut *out, &defines)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Prints the normalized module search path.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_node_path_command(resolved: &ResolvedEnv, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", resolved.module_path())?;
    Ok(())
}
