// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::resolve::node_path::AbsoluteEntries;
use std::path::{Path, PathBuf};

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_json_snapshot!(config, @r#"
    {
      "paths": {},
      "dotenv": {
        "base": ".env",
        "mode_var": "NODE_ENV"
      },
      "module_path": {
        "var": "NODE_PATH",
        "absolute_entries": "drop"
      },
      "client": {
        "namespace_prefix": "REACT_APP_",
        "mode_key": "NODE_ENV",
        "default_mode": "development",
        "public_url_key": "PUBLIC_URL",
        "define_key": "process.env",
        "public_url": ""
      }
    }
    "#);
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[dotenv]
base = "config/.env"

[module_path]
absolute_entries = "keep"

[client]
namespace_prefix = "VITE_"
public_url = "/static"
"#,
    )
    .unwrap();

    assert_eq!(config.dotenv.base, PathBuf::from("config/.env"));
    assert_eq!(config.dotenv.mode_var, "NODE_ENV");
    assert_eq!(config.module_path.absolute_entries, AbsoluteEntries::Keep);
    assert_eq!(config.client.namespace_prefix, "VITE_");
    assert_eq!(config.client.public_url, "/static");
}

#[test]
fn test_unknown_field_rejected() {
    let result = Config::parse("[client]\nnamespace = \"X_\"\n");
    assert!(result.is_err());
}

#[test]
fn test_empty_mode_var_rejected() {
    let result = Config::parse("[dotenv]\nmode_var = \"\"\n");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("mode_var"), "{err}");
}

#[test]
fn test_set_overrides() {
    let config = ConfigLoader::new()
        .inline("[client]\nnamespace_prefix = \"VITE_\"\n")
        .set("client.namespace_prefix=APP_")
        .unwrap()
        .set("dotenv.mode_var=APP_ENV")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.client.namespace_prefix, "APP_");
    assert_eq!(config.dotenv.mode_var, "APP_ENV");
}

#[test]
fn test_set_rejects_malformed() {
    for option in ["no_equals", "nosection=1", ".key=1", "section.=1"] {
        assert!(
            ConfigLoader::new().set(option).is_err(),
            "{option} should be rejected"
        );
    }
}

#[test]
fn test_set_override_value_may_contain_equals() {
    let config = ConfigLoader::new()
        .set("client.public_url=/a=b")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.client.public_url, "/a=b");
}

#[test]
fn test_layer_listing() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("envinject.toml");
    std::fs::write(&present, "").unwrap();
    let missing = dir.path().join("missing.toml");

    let loader = ConfigLoader::new()
        .optional_file(&present)
        .optional_file(&missing)
        .inline("");

    assert_eq!(loader.present_files(), [present.as_path()]);
    assert_eq!(loader.layers().len(), 3);
    assert_eq!(
        loader.layers()[1].to_string(),
        format!("[file] {} (not found, skipped)", missing.display())
    );
    assert_eq!(loader.layers()[2].to_string(), "[inline] <string>");
    assert!(loader.build().is_ok());
}

#[test]
fn test_required_file_missing_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_app_dir_or() {
    let mut config = Config::default();
    let cwd = Path::new("/work");
    assert_eq!(config.app_dir_or(cwd), PathBuf::from("/work"));

    config.paths.app_dir = Some(PathBuf::from("web"));
    assert_eq!(config.app_dir_or(cwd), PathBuf::from("/work/web"));

    config.paths.app_dir = Some(PathBuf::from("/srv/app"));
    assert_eq!(config.app_dir_or(cwd), PathBuf::from("/srv/app"));
}

#[test]
fn test_format_options() {
    let options = Config::default().format_options();

    assert_eq!(options.len(), 11);
    assert_eq!(options[0], "client.default_mode          = development");
    assert!(options.contains(&"module_path.absolute_entries = drop".to_string()));
    assert!(options.contains(&"dotenv.mode_var              = NODE_ENV".to_string()));
}
