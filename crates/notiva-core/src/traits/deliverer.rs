// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delivery adapter trait for the notification delivery provider.

use async_trait::async_trait;

use crate::error::NotivaError;
use crate::types::{Delivery, Notification};

/// Adapter for the delivery provider.
///
/// Forwards a validated notification in a single attempt and reports the
/// provider's verdict. No retries at this layer.
#[async_trait]
pub trait Deliverer: Send + Sync {
    /// Forwards the notification and returns the delivery verdict.
    async fn deliver(&self, notification: &Notification) -> Result<Delivery, NotivaError>;
}
