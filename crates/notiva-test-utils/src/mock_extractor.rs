// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock extraction adapter for deterministic testing.
//!
//! `MockExtractor` implements [`Extractor`] with pre-scripted outcomes,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use notiva_core::{ChatPrompt, Extractor, NotivaError};

/// One scripted outcome for a single extraction call.
#[derive(Debug, Clone)]
enum Scripted {
    Output(String),
    Error(String),
}

/// A mock extraction provider that replays scripted outcomes in FIFO order.
///
/// When the script runs dry, every further call returns a fixed default
/// output that deliberately contains no JSON object, so an unscripted mock
/// behaves as an extractor whose output never validates.
#[derive(Clone, Default)]
pub struct MockExtractor {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<AtomicUsize>,
}

impl MockExtractor {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with successful raw outputs.
    pub fn with_responses(responses: Vec<String>) -> Self {
        let mock = Self::new();
        for response in responses {
            mock.add_response(response);
        }
        mock
    }

    /// Append a successful raw output to the script.
    pub fn add_response(&self, text: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Output(text.into()));
    }

    /// Append a provider error to the script.
    pub fn add_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Error(message.into()));
    }

    /// Number of extraction calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(&self, _prompt: &ChatPrompt) -> Result<String, NotivaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Output(text)) => Ok(text),
            Some(Scripted::Error(message)) => Err(NotivaError::Provider {
                message,
                source: None,
            }),
            None => Ok("mock extraction output".to_string()),
        }
    }
}
