// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        InjectError (16 bytes)
//!                |
//!   +--------+---+----+------+
//!   |        |        |      |
//!   v        v        v      v
//! Config   Dotenv    Fs     Io
//!  Box      Box      Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config  MissingMode, InvalidValue, InvalidOverride
//!   Dotenv  Read, Parse, Unknown
//!   Fs      NotFound, PermissionDenied, IoError
//! ```
//!
//! "File does not exist" is never an error while loading dotenv sources.
//! Everything else surfaces unchanged to the caller.

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`InjectError`].
pub type InjectResult<T> = std::result::Result<T, InjectError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum InjectError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Dotenv source could not be read or parsed.
    #[error("dotenv error: {0}")]
    Dotenv(#[from] Box<DotenvError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error raised by a custom [`DotenvSource`](crate::dotenv::DotenvSource).
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for InjectError {
                fn from(err: $error) -> Self {
                    InjectError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    DotenvError => Dotenv,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The mode variable is absent or empty.
    #[error("The {var} environment variable is required but was not specified.")]
    MissingMode { var: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override that is not `section.key=value`.
    #[error("invalid override '{0}', expected 'section.key=value'")]
    InvalidOverride(String),
}

// --- Dotenv Errors ---

/// Errors raised while reading a dotenv source.
///
/// Parse errors only carry the byte index of the failure, never the
/// offending line, so secrets do not leak into logs.
#[derive(Debug, Error)]
pub enum DotenvError {
    /// The file exists but could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file has invalid syntax.
    #[error("failed to parse '{path}' at position {index}")]
    Parse { path: String, index: usize },

    /// Any other failure reported by the parser.
    #[error("failed to load '{path}'")]
    Unknown { path: String },
}

impl DotenvError {
    /// Maps a `dotenvy` error for the given file.
    pub(crate) fn from_dotenvy(path: &Path, err: dotenvy::Error) -> Self {
        let path = path.display().to_string();
        match err {
            dotenvy::Error::LineParse(_, index) => Self::Parse { path, index },
            dotenvy::Error::Io(source) => Self::Read { path, source },
            _ => Self::Unknown { path },
        }
    }
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised for `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}
