// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP clients for the two outbound provider endpoints.
//!
//! Both clients authenticate with the same static `X-API-Key` credential and
//! are bounded by the configured per-request timeout. Neither performs
//! retries; retry policy belongs to the pipeline orchestrator.

pub mod extract;
pub mod notify;

pub use extract::ExtractClient;
pub use notify::NotifyClient;
