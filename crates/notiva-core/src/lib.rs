// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Notiva notification relay.
//!
//! This crate provides the trait definitions, error type, and domain types
//! used throughout the Notiva workspace. Production adapters implement the
//! traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::NotivaError;
pub use types::{
    ChatMessage, ChatPrompt, Delivery, Notification, NotificationKind, RequestId,
    RequestRecord, RequestStatus,
};

// Re-export adapter traits at crate root.
pub use traits::{Deliverer, Extractor, RequestStore};
