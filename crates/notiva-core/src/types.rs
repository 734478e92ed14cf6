// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Notiva workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a submitted request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

/// Lifecycle status of a submitted request.
///
/// `Sent` and `Failed` are terminal: once the orchestrator writes either,
/// the record is never mutated again.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    Queued,
    Processing,
    Sent,
    Failed,
}

/// A request record as held by the store.
///
/// `user_input` is immutable after creation; only `status` is ever rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// The raw natural-language text the caller submitted.
    pub user_input: String,
    /// Current lifecycle status.
    pub status: RequestStatus,
}

/// Delivery channel for a validated notification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Email,
    Sms,
}

/// A validated, structured notification ready for the delivery provider.
///
/// Produced only by the pipeline's repair step; consumed only by the delivery
/// client. Serializes to the delivery provider's `{to, message, type}` wire
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Destination address or phone number.
    pub to: String,
    /// Message body to deliver.
    pub message: String,
    /// Delivery channel.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

/// A single role/content pair in a chat-style prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// An ordered chat-style prompt sent to the extraction provider.
///
/// Serializes to the provider's `{messages: [{role, content}, ...]}` body.
/// Built fresh per request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub messages: Vec<ChatMessage>,
}

/// Outcome of a single delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The delivery provider accepted the notification.
    Delivered,
    /// The provider declined, errored, or was unreachable.
    Rejected,
}
