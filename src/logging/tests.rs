// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

use super::{LogConfig, LogLevel};

#[test]
fn test_directives_follow_level_order() {
    let directives: Vec<_> = LogLevel::value_variants()
        .iter()
        .map(|level| level.directive())
        .collect();
    assert_eq!(
        directives,
        ["off", "error", "warn", "info", "debug", "trace"]
    );
    assert!(LogLevel::Debug > LogLevel::Warn);
}

#[test]
fn test_level_names_parse() {
    assert_eq!(LogLevel::from_str("trace", true), Ok(LogLevel::Trace));
    assert_eq!(LogLevel::from_str("OFF", true), Ok(LogLevel::Off));
    assert!(LogLevel::from_str("dump", true).is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Warn);
    assert_eq!(config.file_level(), LogLevel::Warn);
    assert_eq!(config.log_file(), None);
    assert!(!config.json());
}

#[test]
fn test_file_level_follows_console_unless_set() {
    let inherited = LogConfig::builder()
        .console_level(LogLevel::Debug)
        .log_file("out/envinject.log")
        .build();
    assert_eq!(inherited.file_level(), LogLevel::Debug);
    assert_eq!(
        inherited.log_file(),
        Some(std::path::Path::new("out/envinject.log"))
    );

    let explicit = LogConfig::builder()
        .console_level(LogLevel::Error)
        .file_level(LogLevel::Trace)
        .json(true)
        .build();
    assert_eq!(explicit.file_level(), LogLevel::Trace);
    assert!(explicit.json());
}

#[test]
fn test_console_filter_directives() {
    let config = LogConfig::builder()
        .filter("envinject::resolve=trace,warn")
        .build();
    let filter = config.console_filter().unwrap();
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

    let invalid = LogConfig::builder().filter("envinject=loud").build();
    assert!(invalid.console_filter().is_err());
}

#[test]
fn test_console_filter_from_level() {
    let config = LogConfig::builder().console_level(LogLevel::Info).build();
    assert_eq!(
        config.console_filter().unwrap().max_level_hint(),
        Some(LevelFilter::INFO)
    );
}
