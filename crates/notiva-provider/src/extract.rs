// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the extraction provider's chat-completion endpoint.
//!
//! Sends a chat-style prompt and returns the raw text content of the first
//! choice. Transport failures, non-2xx statuses, and malformed response
//! envelopes all surface as provider errors; retry policy lives in the
//! orchestrator, not here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::debug;

use notiva_core::{ChatPrompt, Extractor, NotivaError};

/// Path of the chat-completion endpoint, relative to the provider base URL.
const EXTRACT_PATH: &str = "/v1/ai/extract";

/// Response envelope returned by the extraction provider.
#[derive(Debug, Deserialize)]
struct ExtractResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for the extraction provider.
///
/// Authentication and content-type headers are attached to every request via
/// the underlying client's default headers.
#[derive(Debug, Clone)]
pub struct ExtractClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExtractClient {
    /// Creates a new extraction client.
    ///
    /// # Arguments
    /// * `base_url` - Provider base URL, e.g. `http://localhost:3001`
    /// * `api_key` - Static credential sent as `X-API-Key`
    /// * `timeout` - Per-request timeout
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
impl Extractor for ExtractClient {
    async fn extract(&self, prompt: &ChatPrompt) -> Result<String, NotivaError> {
        let url = format!("{}{EXTRACT_PATH}", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(prompt)
            .send()
            .await
            .map_err(|e| NotivaError::Provider {
                message: format!("extraction request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "extraction response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotivaError::Provider {
                message: format!("extraction provider returned {status}: {body}"),
                source: None,
            });
        }

        let envelope: ExtractResponse =
            response.json().await.map_err(|e| NotivaError::Provider {
                message: format!("failed to parse extraction response: {e}"),
                source: Some(Box::new(e)),
            })?;

        envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| NotivaError::Provider {
                message: "extraction response contained no choices".to_string(),
                source: None,
            })
    }
}

/// Builds the default header map shared by both provider clients.
pub(crate) fn auth_headers(api_key: &str) -> Result<HeaderMap, NotivaError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-api-key",
        HeaderValue::from_str(api_key).map_err(|e| {
            NotivaError::Config(format!("invalid API key header value: {e}"))
        })?,
    );
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notiva_core::ChatMessage;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_prompt() -> ChatPrompt {
        ChatPrompt {
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: "You are an information extractor.".into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: "Send email to test@test.com".into(),
                },
            ],
        }
    }

    fn test_client(base_url: &str) -> ExtractClient {
        ExtractClient::new(base_url, "test-api-key", Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn extract_returns_first_choice_content() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "choices": [
                {"message": {"content": "{\"to\": \"a@b.com\"}"}},
                {"message": {"content": "ignored second choice"}}
            ]
        });

        Mock::given(method("POST"))
            .and(path("/v1/ai/extract"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let content = client.extract(&test_prompt()).await.unwrap();
        assert_eq!(content, "{\"to\": \"a@b.com\"}");
    }

    #[tokio::test]
    async fn extract_sends_auth_header_and_messages_body() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "choices": [{"message": {"content": "ok"}}]
        });

        Mock::given(method("POST"))
            .and(path("/v1/ai/extract"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "messages": [
                    {"role": "system", "content": "You are an information extractor."},
                    {"role": "user", "content": "Send email to test@test.com"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.extract(&test_prompt()).await;
        assert!(result.is_ok(), "headers and body should match: {result:?}");
    }

    #[tokio::test]
    async fn extract_fails_on_non_2xx() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/ai/extract"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.extract(&test_prompt()).await.unwrap_err();
        assert!(err.to_string().contains("503"), "got: {err}");
    }

    #[tokio::test]
    async fn extract_fails_on_empty_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/ai/extract"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.extract(&test_prompt()).await.unwrap_err();
        assert!(err.to_string().contains("no choices"), "got: {err}");
    }

    #[tokio::test]
    async fn extract_fails_on_malformed_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/ai/extract"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"unexpected": "shape"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert!(client.extract(&test_prompt()).await.is_err());
    }

    #[tokio::test]
    async fn extract_fails_when_provider_is_unreachable() {
        // Nothing listens on this port; connection is refused immediately.
        let client = test_client("http://127.0.0.1:9");
        let err = client.extract(&test_prompt()).await.unwrap_err();
        assert!(matches!(err, NotivaError::Provider { .. }));
    }
}
