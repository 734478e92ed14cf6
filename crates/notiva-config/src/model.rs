// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Notiva relay.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Notiva configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotivaConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Inbound HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Extraction/delivery provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Pipeline retry settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Inbound HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "0.0.0.0".to_string()
}

fn default_gateway_port() -> u16 {
    5000
}

/// Provider configuration, shared by the extraction and delivery clients.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Base URL of the provider service.
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,

    /// Static API credential sent as the `X-API-Key` header.
    #[serde(default = "default_provider_api_key")]
    pub api_key: String,

    /// Per-request timeout in seconds for provider calls.
    #[serde(default = "default_provider_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_provider_base_url(),
            api_key: default_provider_api_key(),
            timeout_secs: default_provider_timeout_secs(),
        }
    }
}

fn default_provider_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_provider_api_key() -> String {
    "test-dev-2026".to_string()
}

fn default_provider_timeout_secs() -> u64 {
    10
}

/// Pipeline retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Retry budget for the extract+validate step. Total attempts are
    /// `max_retries + 1`.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed delay between extraction retries, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}
