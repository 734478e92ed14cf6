// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./notiva.toml` > `~/.config/notiva/notiva.toml`
//! > `/etc/notiva/notiva.toml` with environment variable overrides via the
//! `NOTIVA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::NotivaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/notiva/notiva.toml` (system-wide)
/// 3. `~/.config/notiva/notiva.toml` (user XDG config)
/// 4. `./notiva.toml` (local directory)
/// 5. `NOTIVA_*` environment variables
pub fn load_config() -> Result<NotivaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NotivaConfig::default()))
        .merge(Toml::file("/etc/notiva/notiva.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("notiva/notiva.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("notiva.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from an inline TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<NotivaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NotivaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NotivaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NotivaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `NOTIVA_PROVIDER_BASE_URL` must map to
/// `provider.base_url`, not `provider.base.url`.
fn env_provider() -> Env {
    Env::prefixed("NOTIVA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: NOTIVA_PROVIDER_API_KEY -> "provider_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("log_", "log.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("provider_", "provider.", 1)
            .replacen("pipeline_", "pipeline.", 1);
        mapped.into()
    })
}
