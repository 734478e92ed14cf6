// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `notiva serve` command implementation.
//!
//! Assembles the in-memory store, the two provider clients, and the pipeline
//! orchestrator, then serves the gateway until the process exits.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use notiva_config::NotivaConfig;
use notiva_core::{NotivaError, RequestStore};
use notiva_gateway::{start_server, GatewayState, ServerConfig};
use notiva_pipeline::Orchestrator;
use notiva_provider::{ExtractClient, NotifyClient};
use notiva_store::MemoryStore;

/// Runs the `notiva serve` command.
pub async fn run_serve(config: NotivaConfig) -> Result<(), NotivaError> {
    init_tracing(&config.log.level);

    info!(
        provider = config.provider.base_url.as_str(),
        max_retries = config.pipeline.max_retries,
        "starting notiva serve"
    );

    let timeout = Duration::from_secs(config.provider.timeout_secs);
    let extractor = ExtractClient::new(
        config.provider.base_url.clone(),
        &config.provider.api_key,
        timeout,
    )?;
    let deliverer = NotifyClient::new(
        config.provider.base_url.clone(),
        &config.provider.api_key,
        timeout,
    )?;

    let store: Arc<dyn RequestStore> = Arc::new(MemoryStore::new());

    let orchestrator = Arc::new(Orchestrator::new(
        Arc::new(extractor),
        Arc::new(deliverer),
        Arc::clone(&store),
        config.pipeline.max_retries,
        Duration::from_millis(config.pipeline.retry_delay_ms),
    ));

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };
    let state = GatewayState {
        store,
        orchestrator,
    };

    start_server(&server_config, state).await
}

/// Initializes the tracing subscriber, honoring `RUST_LOG` when set.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,notiva={log_level},notiva_gateway={log_level},notiva_pipeline={log_level},notiva_provider={log_level},notiva_store={log_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
