// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Notiva notification relay.

use thiserror::Error;

/// The primary error type used across all Notiva adapter traits and core operations.
#[derive(Debug, Error)]
pub enum NotivaError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// The referenced request identifier does not exist in the store.
    #[error("request not found: {id}")]
    NotFound { id: String },

    /// Extraction provider errors (transport failure, non-2xx status, malformed envelope).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Gateway transport errors (bind failure, serve failure).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
