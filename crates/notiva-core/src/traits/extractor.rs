// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extraction adapter trait for language-model provider integrations.

use async_trait::async_trait;

use crate::error::NotivaError;
use crate::types::ChatPrompt;

/// Adapter for the extraction provider.
///
/// Sends a chat-style prompt and returns the raw text content of the model's
/// reply. Implementations perform a single attempt; retry policy lives in the
/// orchestrator.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Sends the prompt and returns the first choice's text content.
    async fn extract(&self, prompt: &ChatPrompt) -> Result<String, NotivaError>;
}
