// envinject: Build-time environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core state shared by the resolution pipeline.
//!
//! ```text
//!    core
//!     |
//!     v
//!    env
//!     |
//!   Env (explicit context replacing the ambient process map)
//! ```

pub mod env;
