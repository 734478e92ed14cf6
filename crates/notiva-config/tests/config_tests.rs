// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for configuration loading and merging.

use notiva_config::{load_config_from_str, NotivaConfig};

#[test]
fn defaults_match_the_documented_values() {
    let config = NotivaConfig::default();
    assert_eq!(config.log.level, "info");
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 5000);
    assert_eq!(config.provider.base_url, "http://localhost:3001");
    assert_eq!(config.provider.api_key, "test-dev-2026");
    assert_eq!(config.provider.timeout_secs, 10);
    assert_eq!(config.pipeline.max_retries, 3);
    assert_eq!(config.pipeline.retry_delay_ms, 500);
}

#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("empty config should load");
    assert_eq!(config.gateway.port, 5000);
    assert_eq!(config.pipeline.max_retries, 3);
}

#[test]
fn toml_overrides_defaults() {
    let config = load_config_from_str(
        r#"
        [gateway]
        port = 8080

        [provider]
        base_url = "http://provider.internal:9000"
        api_key = "prod-key"

        [pipeline]
        max_retries = 5
        retry_delay_ms = 250
        "#,
    )
    .expect("valid config should load");

    assert_eq!(config.gateway.port, 8080);
    // Unset keys in a present section still default.
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.provider.base_url, "http://provider.internal:9000");
    assert_eq!(config.provider.api_key, "prod-key");
    assert_eq!(config.pipeline.max_retries, 5);
    assert_eq!(config.pipeline.retry_delay_ms, 250);
}

#[test]
fn unknown_section_is_rejected() {
    let result = load_config_from_str(
        r#"
        [databse]
        url = "oops"
        "#,
    );
    assert!(result.is_err(), "unknown section should be rejected");
}

#[test]
fn unknown_key_in_known_section_is_rejected() {
    let result = load_config_from_str(
        r#"
        [pipeline]
        max_retrys = 3
        "#,
    );
    assert!(result.is_err(), "misspelled key should be rejected");
}

#[test]
fn wrong_type_is_rejected() {
    let result = load_config_from_str(
        r#"
        [gateway]
        port = "not-a-port"
        "#,
    );
    assert!(result.is_err(), "type mismatch should be rejected");
}

#[test]
fn config_round_trips_through_toml() {
    let config = NotivaConfig::default();
    let serialized = toml::to_string(&config).expect("config should serialize");
    let reloaded = load_config_from_str(&serialized).expect("serialized config should reload");
    assert_eq!(reloaded.gateway.port, config.gateway.port);
    assert_eq!(reloaded.provider.api_key, config.provider.api_key);
}
