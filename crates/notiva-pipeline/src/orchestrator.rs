// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline orchestrator: drives one request from extraction to terminal status.
//!
//! The orchestrator runs detached (fire-and-forget): the HTTP caller has
//! already been answered by the time it executes, so nothing it does may
//! propagate. Every fault is absorbed and resolved to the terminal status
//! `failed`; completion is observed only through the request store.
//!
//! Retries target the extract+validate unit as a whole: a provider error and
//! a validation failure are the same outcome. Delivery is attempted exactly
//! once.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use notiva_core::{
    ChatPrompt, Deliverer, Delivery, Extractor, Notification, RequestId, RequestStatus,
    RequestStore,
};

use crate::prompt::build_prompt;
use crate::repair::repair_and_validate;

/// Drives requests through extraction, validation, retry, and delivery.
///
/// Cheap to clone; the adapters are shared behind `Arc`.
#[derive(Clone)]
pub struct Orchestrator {
    extractor: Arc<dyn Extractor>,
    deliverer: Arc<dyn Deliverer>,
    store: Arc<dyn RequestStore>,
    max_retries: u32,
    retry_delay: Duration,
}

impl Orchestrator {
    /// Creates an orchestrator with a retry budget and fixed inter-retry delay.
    ///
    /// The budget counts retries, not attempts: `max_retries = 3` means up to
    /// four extraction attempts in total.
    pub fn new(
        extractor: Arc<dyn Extractor>,
        deliverer: Arc<dyn Deliverer>,
        store: Arc<dyn RequestStore>,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Self {
        Self {
            extractor,
            deliverer,
            store,
            max_retries,
            retry_delay,
        }
    }

    /// Schedules [`run`](Self::run) as a detached background task.
    pub fn spawn(&self, id: RequestId, user_input: String) {
        let orchestrator = self.clone();
        tokio::spawn(async move {
            orchestrator.run(id, user_input).await;
        });
    }

    /// Runs the pipeline for one request and writes its terminal status.
    ///
    /// Never returns an error and never panics outward; the only observable
    /// effect is the status written to the store.
    pub async fn run(&self, id: RequestId, user_input: String) {
        let terminal = self.drive(&id, &user_input).await;
        info!(id = %id.0, status = %terminal, "request resolved");

        if let Err(e) = self.store.set_status(&id, terminal).await {
            warn!(id = %id.0, error = %e, "could not record terminal status");
        }
    }

    async fn drive(&self, id: &RequestId, user_input: &str) -> RequestStatus {
        let prompt = build_prompt(user_input);

        let Some(notification) = self.extract_with_retries(id, &prompt).await else {
            return RequestStatus::Failed;
        };

        match self.deliverer.deliver(&notification).await {
            Ok(Delivery::Delivered) => RequestStatus::Sent,
            Ok(Delivery::Rejected) => RequestStatus::Failed,
            Err(e) => {
                warn!(id = %id.0, error = %e, "delivery attempt errored");
                RequestStatus::Failed
            }
        }
    }

    /// The retried unit: one extraction call plus repair/validation.
    ///
    /// An explicit bounded loop, so the remaining budget is a visible loop
    /// invariant rather than recursion depth.
    async fn extract_with_retries(
        &self,
        id: &RequestId,
        prompt: &ChatPrompt,
    ) -> Option<Notification> {
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tokio::time::sleep(self.retry_delay).await;
            }

            match self.extractor.extract(prompt).await {
                Ok(raw) => {
                    if let Some(notification) = repair_and_validate(&raw) {
                        return Some(notification);
                    }
                    debug!(id = %id.0, attempt, "extraction output failed validation");
                }
                Err(e) => {
                    warn!(id = %id.0, attempt, error = %e, "extraction attempt failed");
                }
            }
        }

        warn!(id = %id.0, budget = self.max_retries, "extraction retry budget exhausted");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notiva_core::NotificationKind;
    use notiva_store::MemoryStore;
    use notiva_test_utils::{MockDeliverer, MockExtractor};

    const GOOD_OUTPUT: &str = "Sure! {to: 'a@b.com', message: 'hi', type: 'email'}";

    fn orchestrator(
        extractor: &MockExtractor,
        deliverer: &MockDeliverer,
        store: &Arc<MemoryStore>,
    ) -> Orchestrator {
        Orchestrator::new(
            Arc::new(extractor.clone()),
            Arc::new(deliverer.clone()),
            Arc::clone(store) as Arc<dyn RequestStore>,
            3,
            Duration::from_millis(1),
        )
    }

    async fn submit(store: &Arc<MemoryStore>, input: &str) -> RequestId {
        let id = store.create(input.to_string()).await;
        store.set_status(&id, RequestStatus::Processing).await.unwrap();
        id
    }

    #[tokio::test]
    async fn happy_path_resolves_to_sent() {
        let extractor = MockExtractor::with_responses(vec![GOOD_OUTPUT.to_string()]);
        let deliverer = MockDeliverer::new();
        let store = Arc::new(MemoryStore::new());
        let id = submit(&store, "send an email to a@b.com saying hi").await;

        orchestrator(&extractor, &deliverer, &store)
            .run(id.clone(), "send an email to a@b.com saying hi".to_string())
            .await;

        assert_eq!(store.get(&id).await.unwrap().status, RequestStatus::Sent);
        assert_eq!(extractor.call_count(), 1);
        assert_eq!(deliverer.call_count(), 1);

        let sent = deliverer.delivered_notifications();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "a@b.com");
        assert_eq!(sent[0].kind, NotificationKind::Email);
    }

    #[tokio::test]
    async fn unparsable_output_exhausts_budget_then_fails() {
        // Empty queue: every call falls back to unparsable default output.
        let extractor = MockExtractor::new();
        let deliverer = MockDeliverer::new();
        let store = Arc::new(MemoryStore::new());
        let id = submit(&store, "input").await;

        orchestrator(&extractor, &deliverer, &store)
            .run(id.clone(), "input".to_string())
            .await;

        assert_eq!(store.get(&id).await.unwrap().status, RequestStatus::Failed);
        // Initial attempt plus the full retry budget of 3.
        assert_eq!(extractor.call_count(), 4);
        assert_eq!(deliverer.call_count(), 0, "delivery must not be attempted");
    }

    #[tokio::test]
    async fn provider_errors_consume_the_same_budget() {
        let extractor = MockExtractor::new();
        for _ in 0..4 {
            extractor.add_error("connection reset");
        }
        let deliverer = MockDeliverer::new();
        let store = Arc::new(MemoryStore::new());
        let id = submit(&store, "input").await;

        orchestrator(&extractor, &deliverer, &store)
            .run(id.clone(), "input".to_string())
            .await;

        assert_eq!(store.get(&id).await.unwrap().status, RequestStatus::Failed);
        assert_eq!(extractor.call_count(), 4);
    }

    #[tokio::test]
    async fn recovers_when_a_retry_produces_valid_output() {
        let extractor = MockExtractor::with_responses(vec![
            "no json at all".to_string(),
            "still nothing".to_string(),
            GOOD_OUTPUT.to_string(),
        ]);
        let deliverer = MockDeliverer::new();
        let store = Arc::new(MemoryStore::new());
        let id = submit(&store, "input").await;

        orchestrator(&extractor, &deliverer, &store)
            .run(id.clone(), "input".to_string())
            .await;

        assert_eq!(store.get(&id).await.unwrap().status, RequestStatus::Sent);
        assert_eq!(extractor.call_count(), 3);
        assert_eq!(deliverer.call_count(), 1);
    }

    #[tokio::test]
    async fn rejected_delivery_fails_without_delivery_retry() {
        let extractor = MockExtractor::with_responses(vec![GOOD_OUTPUT.to_string()]);
        let deliverer = MockDeliverer::rejecting();
        let store = Arc::new(MemoryStore::new());
        let id = submit(&store, "input").await;

        orchestrator(&extractor, &deliverer, &store)
            .run(id.clone(), "input".to_string())
            .await;

        assert_eq!(store.get(&id).await.unwrap().status, RequestStatus::Failed);
        assert_eq!(deliverer.call_count(), 1, "delivery is single-shot");
        assert_eq!(extractor.call_count(), 1, "extraction must not be re-run");
    }

    #[tokio::test]
    async fn delivery_error_is_absorbed_as_failed() {
        let extractor = MockExtractor::with_responses(vec![GOOD_OUTPUT.to_string()]);
        let deliverer = MockDeliverer::failing();
        let store = Arc::new(MemoryStore::new());
        let id = submit(&store, "input").await;

        orchestrator(&extractor, &deliverer, &store)
            .run(id.clone(), "input".to_string())
            .await;

        assert_eq!(store.get(&id).await.unwrap().status, RequestStatus::Failed);
        assert_eq!(deliverer.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_record_does_not_panic() {
        let extractor = MockExtractor::with_responses(vec![GOOD_OUTPUT.to_string()]);
        let deliverer = MockDeliverer::new();
        let store = Arc::new(MemoryStore::new());

        // No record was ever created for this id; the terminal write fails
        // with NotFound and is absorbed.
        orchestrator(&extractor, &deliverer, &store)
            .run(RequestId("ghost".to_string()), "input".to_string())
            .await;

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn spawn_runs_detached_to_completion() {
        let extractor = MockExtractor::with_responses(vec![GOOD_OUTPUT.to_string()]);
        let deliverer = MockDeliverer::new();
        let store = Arc::new(MemoryStore::new());
        let id = submit(&store, "input").await;

        let orchestrator = Arc::new(orchestrator(&extractor, &deliverer, &store));
        orchestrator.spawn(id.clone(), "input".to_string());

        // Completion is observed only through the store.
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            let status = store.get(&id).await.unwrap().status;
            if status == RequestStatus::Sent {
                break;
            }
            assert_eq!(status, RequestStatus::Processing, "status must not revert");
            assert!(
                tokio::time::Instant::now() < deadline,
                "orchestrator did not finish in time"
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}
