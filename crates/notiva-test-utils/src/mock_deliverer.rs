// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock delivery adapter for deterministic testing.
//!
//! `MockDeliverer` implements [`Deliverer`] with a fixed verdict and captures
//! every notification it is handed for assertion in tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use notiva_core::{Deliverer, Delivery, Notification, NotivaError};

/// The verdict every `deliver` call produces.
#[derive(Debug, Clone, Copy)]
enum Verdict {
    Deliver,
    Reject,
    Fail,
}

/// A mock delivery provider with a fixed verdict and captured notifications.
#[derive(Clone)]
pub struct MockDeliverer {
    verdict: Verdict,
    delivered: Arc<Mutex<Vec<Notification>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDeliverer {
    /// Create a mock that accepts every notification.
    pub fn new() -> Self {
        Self::with_verdict(Verdict::Deliver)
    }

    /// Create a mock that rejects every notification (provider reachable but
    /// declining).
    pub fn rejecting() -> Self {
        Self::with_verdict(Verdict::Reject)
    }

    /// Create a mock whose every call errors (unexpected fault during the
    /// delivery step).
    pub fn failing() -> Self {
        Self::with_verdict(Verdict::Fail)
    }

    fn with_verdict(verdict: Verdict) -> Self {
        Self {
            verdict,
            delivered: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of delivery attempts made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every notification passed to `deliver`, in call order, regardless of
    /// verdict.
    pub fn delivered_notifications(&self) -> Vec<Notification> {
        self.delivered.lock().unwrap().clone()
    }
}

impl Default for MockDeliverer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Deliverer for MockDeliverer {
    async fn deliver(&self, notification: &Notification) -> Result<Delivery, NotivaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.delivered.lock().unwrap().push(notification.clone());

        match self.verdict {
            Verdict::Deliver => Ok(Delivery::Delivered),
            Verdict::Reject => Ok(Delivery::Rejected),
            Verdict::Fail => Err(NotivaError::Provider {
                message: "mock delivery failure".to_string(),
                source: None,
            }),
        }
    }
}
