// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text repair and validation for extraction provider output.
//!
//! Language models embellish: prose around the object, unquoted keys,
//! single-quoted strings, stray newlines. This module recovers a well-formed
//! JSON object from such text and coerces it into a [`Notification`], or
//! determines that it cannot.
//!
//! The repair contract is deterministic and order matters:
//! 1. collapse newline/carriage-return/tab runs to a single space
//! 2. quote bare object keys (`word:` becomes `"word":`)
//! 3. take the first non-greedy `{...}` substring as the candidate
//! 4. normalize single quotes to double quotes within the candidate
//! 5. parse as JSON, lower-case the keys, coerce into the notification shape
//!
//! Known limitation: the non-greedy match in step 3 stops at the first `}`,
//! so nested objects are truncated and fail to parse. Text with several
//! `{...}` groups uses only the first.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use notiva_core::Notification;

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\r\t]+").unwrap());
static BARE_KEYS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+) *:").unwrap());
static OBJECT_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{.*?\}").unwrap());

/// Why a repair attempt failed. Internal only: callers see a uniform "no
/// result", matching the pipeline's self-healing retry policy.
#[derive(Debug, Error)]
enum RepairError {
    #[error("no brace-delimited object in extraction output")]
    NoJsonFound,
    #[error("candidate object is not valid JSON")]
    MalformedJson,
    #[error("object does not match the notification shape: {0}")]
    SchemaMismatch(String),
}

/// Recovers a validated [`Notification`] from raw extraction output.
///
/// Pure with respect to its input; no I/O, no shared state. Returns `None`
/// when no notification can be recovered, for any reason.
pub fn repair_and_validate(content: &str) -> Option<Notification> {
    match repair(content) {
        Ok(notification) => Some(notification),
        Err(e) => {
            debug!(error = %e, "extraction output rejected");
            None
        }
    }
}

fn repair(content: &str) -> Result<Notification, RepairError> {
    let flattened = WHITESPACE_RUNS.replace_all(content, " ");
    let keyed = BARE_KEYS.replace_all(&flattened, "\"${1}\":");
    let candidate = OBJECT_CANDIDATE
        .find(&keyed)
        .ok_or(RepairError::NoJsonFound)?
        .as_str()
        .replace('\'', "\"");

    let fields: Map<String, Value> =
        serde_json::from_str(&candidate).map_err(|_| RepairError::MalformedJson)?;

    // Case-insensitive field matching: keys are lower-cased, values are not.
    let lowered: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();

    let notification: Notification = serde_json::from_value(Value::Object(lowered))
        .map_err(|e| RepairError::SchemaMismatch(e.to_string()))?;

    if notification.to.is_empty() || notification.message.is_empty() {
        return Err(RepairError::SchemaMismatch(
            "destination and message must be non-empty".to_string(),
        ));
    }

    Ok(notification)
}
