// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for command handlers.

use std::fs;
use std::path::Path;

use super::Session;
use super::config::{build_config_loader, run_configs_command, run_options_command};
use super::resolve::{public_url, run_node_path_command, run_resolve_command};
use super::sources::{SourceStatus, list_sources, run_sources_command};
use crate::cli::global::GlobalOptions;
use crate::cli::resolve::{OutputFormat, ResolveArgs};
use crate::config::Config;
use crate::core::env::container::Env;

fn session(dir: &Path, global: &GlobalOptions, vars: &[(&str, &str)]) -> Session {
    let env: Env = vars.iter().copied().collect();
    Session::prepare(global, Config::default(), dir, env).unwrap()
}

fn resolve_args(format: OutputFormat) -> ResolveArgs {
    ResolveArgs {
        public_url: Some("/public".to_string()),
        public_path: None,
        format,
    }
}

fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_resolve_json_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "REACT_APP_X=a\nFOO_BAR=1\n").unwrap();
    let s = session(dir.path(), &GlobalOptions::default(), &[("NODE_ENV", "development")]);
    let config = s.config().clone();
    let resolved = s.resolve().unwrap();

    let output = render(|out| {
        run_resolve_command(&resolve_args(OutputFormat::Json), &config, &resolved, out).unwrap();
    });

    insta::assert_snapshot!(output.trim_end(), @r#"
    {
      "raw": {
        "NODE_ENV": "development",
        "PUBLIC_URL": "/public",
        "REACT_APP_X": "a"
      },
      "stringified": {
        "process.env": {
          "NODE_ENV": "\"development\"",
          "PUBLIC_URL": "\"/public\"",
          "REACT_APP_X": "\"a\""
        }
      }
    }
    "#);
}

#[test]
fn test_resolve_raw_and_define_output() {
    let dir = tempfile::tempdir().unwrap();
    let s = session(
        dir.path(),
        &GlobalOptions::default(),
        &[("NODE_ENV", "production"), ("REACT_APP_Y", "b")],
    );
    let config = s.config().clone();
    let resolved = s.resolve().unwrap();

    let raw = render(|out| {
        run_resolve_command(&resolve_args(OutputFormat::Raw), &config, &resolved, out).unwrap();
    });
    assert_eq!(raw, "NODE_ENV=production\nPUBLIC_URL=/public\nREACT_APP_Y=b\n");

    let define = render(|out| {
        run_resolve_command(&resolve_args(OutputFormat::Define), &config, &resolved, out)
            .unwrap();
    });
    let parsed: serde_json::Value = serde_json::from_str(&define).unwrap();
    assert_eq!(parsed["process.env.REACT_APP_Y"], "\"b\"");
    assert_eq!(parsed["process.env.NODE_ENV"], "\"production\"");
}

#[test]
fn test_mode_flag_overrides_environment() {
    let dir = tempfile::tempdir().unwrap();
    let global = GlobalOptions {
        mode: Some("test".to_string()),
        ..GlobalOptions::default()
    };
    let s = session(dir.path(), &global, &[("NODE_ENV", "production")]);

    assert_eq!(s.env().get("NODE_ENV"), Some("test"));
}

#[test]
fn test_missing_mode_fails_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let s = session(dir.path(), &GlobalOptions::default(), &[]);

    let err = s.resolve().unwrap_err();
    assert!(
        err.to_string().contains("NODE_ENV environment variable is required"),
        "{err:#}"
    );
}

#[test]
fn test_public_url_sources() {
    let mut config = Config::default();
    config.client.public_url = "/configured".to_string();

    let explicit = resolve_args(OutputFormat::Json);
    assert_eq!(public_url(&explicit, &config), "/public");

    let from_path = ResolveArgs {
        public_url: None,
        public_path: Some("/served/".to_string()),
        format: OutputFormat::Json,
    };
    assert_eq!(public_url(&from_path, &config), "/served");

    let fallback = ResolveArgs {
        public_url: None,
        public_path: None,
        format: OutputFormat::Json,
    };
    assert_eq!(public_url(&fallback, &config), "/configured");
}

#[cfg(not(windows))]
#[test]
fn test_node_path_output_drops_absolute_entries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "NODE_PATH=src:/opt/shared\n").unwrap();
    let s = session(dir.path(), &GlobalOptions::default(), &[("NODE_ENV", "development")]);
    let app_dir = s.resolver().app_dir().to_path_buf();
    let resolved = s.resolve().unwrap();

    let output = render(|out| run_node_path_command(&resolved, out).unwrap());

    assert_eq!(
        output,
        format!("{}\n", app_dir.join("src").display())
    );
}

#[test]
fn test_list_sources_development() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env.local"), "").unwrap();
    let s = session(dir.path(), &GlobalOptions::default(), &[("NODE_ENV", "development")]);

    let statuses: Vec<_> = list_sources(&s)
        .unwrap()
        .into_iter()
        .map(|(path, status)| {
            (
                path.file_name().unwrap().to_string_lossy().into_owned(),
                status,
            )
        })
        .collect();

    assert_eq!(
        statuses,
        vec![
            (".env.development.local".to_string(), SourceStatus::Absent),
            (".env.development".to_string(), SourceStatus::Absent),
            (".env.local".to_string(), SourceStatus::Present),
            (".env".to_string(), SourceStatus::Absent),
        ]
    );
}

#[test]
fn test_sources_output_in_test_mode() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "").unwrap();
    let s = session(dir.path(), &GlobalOptions::default(), &[("NODE_ENV", "test")]);
    let base = s.resolver().dotenv_base();

    let output = render(|out| run_sources_command(&s, out).unwrap());

    let expected = format!(
        "1. [absent] {b}.test.local\n2. [absent] {b}.test\n3. [ignored (test mode)] {b}.local\n4. [present] {b}\n",
        b = base.display()
    );
    assert_eq!(output, expected);
}

#[test]
fn test_options_and_configs_output() {
    let options = render(|out| run_options_command(&Config::default(), out).unwrap());
    assert!(options.contains("client.namespace_prefix      = REACT_APP_\n"));

    let global = GlobalOptions {
        no_default_config: true,
        options: vec!["client.public_url=/x".to_string()],
        ..GlobalOptions::default()
    };
    let loader = build_config_loader(&global).unwrap();
    let configs = render(|out| run_configs_command(&loader, out).unwrap());
    assert_eq!(
        configs,
        "No configuration files loaded\n\
         1. [env] ENVINJECT_<SECTION>__<KEY>\n\
         2. [set] client.public_url=/x\n"
    );
}

#[test]
fn test_build_config_loader_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("envinject.toml"),
        "[client]\nnamespace_prefix = \"VITE_\"\n",
    )
    .unwrap();
    let global = GlobalOptions {
        app_dir: Some(dir.path().to_path_buf()),
        options: vec!["client.default_mode=production".to_string()],
        ..GlobalOptions::default()
    };

    let loader = build_config_loader(&global).unwrap();
    assert_eq!(loader.present_files().len(), 1);

    let config = loader.build().unwrap();
    assert_eq!(config.client.namespace_prefix, "VITE_");
    assert_eq!(config.client.default_mode, "production");
    assert_eq!(config.paths.app_dir.as_deref(), Some(dir.path()));
}
