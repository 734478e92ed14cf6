// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat prompt construction for the extraction provider.

use notiva_core::{ChatMessage, ChatPrompt};

/// Fixed system instruction sent with every extraction request.
const SYSTEM_PROMPT: &str = r#"You are an information extractor.
Extract the destination, message and type (email or sms).
You must respond only with a JSON object with exactly these fields:
{
    "to" : string (destination),
    "message" : string,
    "type" : "email" | "sms"
}
Do not include markdown, explanations or additional information."#;

/// Builds the two-message prompt for one request: the fixed system
/// instruction followed by the caller's raw input, verbatim.
pub fn build_prompt(user_input: &str) -> ChatPrompt {
    ChatPrompt {
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_input.to_string(),
            },
        ],
    }
}
