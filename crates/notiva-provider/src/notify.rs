// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the delivery provider.
//!
//! A single attempt per notification: a 200-class response is `Delivered`,
//! anything else -- including a transport failure -- is `Rejected`. The
//! delivery step is never retried.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use notiva_core::{Deliverer, Delivery, Notification, NotivaError};

use crate::extract::auth_headers;

/// Path of the delivery endpoint, relative to the provider base URL.
const NOTIFY_PATH: &str = "/v1/notify";

/// HTTP client for the delivery provider.
#[derive(Debug, Clone)]
pub struct NotifyClient {
    client: reqwest::Client,
    base_url: String,
}

impl NotifyClient {
    /// Creates a new delivery client.
    ///
    /// Shares the auth header scheme with [`crate::ExtractClient`]; both talk
    /// to the same provider service.
    pub fn new(
        base_url: impl Into<String>,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, NotivaError> {
        let client = reqwest::Client::builder()
            .default_headers(auth_headers(api_key)?)
            .timeout(timeout)
            .build()
            .map_err(|e| NotivaError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Deliverer for NotifyClient {
    async fn deliver(&self, notification: &Notification) -> Result<Delivery, NotivaError> {
        let url = format!("{}{NOTIFY_PATH}", self.base_url);

        let response = match self.client.post(&url).json(notification).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "delivery request failed");
                return Ok(Delivery::Rejected);
            }
        };

        let status = response.status();
        debug!(status = %status, to = notification.to.as_str(), "delivery response received");

        if status.is_success() {
            Ok(Delivery::Delivered)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "delivery provider declined notification");
            Ok(Delivery::Rejected)
        }
    }
}
