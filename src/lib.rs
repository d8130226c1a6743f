// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         resolve / sources / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, ENVINJECT_*, --set |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |          resolve          |
//!              |  sources -> node_path ->  |
//!              |          client           |
//!              '------+--------------+-----'
//!                     |              |
//!                     v              v
//!                  dotenv        core::env
//!                 (dotenvy)    Env context
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod dotenv;
pub mod error;
pub mod logging;
pub mod resolve;
