// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Notiva relay.
//!
//! Layered loading (defaults, TOML hierarchy, `NOTIVA_*` env vars) with
//! strict unknown-key rejection.

#![allow(clippy::result_large_err)]

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::NotivaConfig;
