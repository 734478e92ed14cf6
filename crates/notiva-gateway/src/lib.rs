// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inbound HTTP gateway for the Notiva relay.
//!
//! Exposes the submission, process, and status endpoints over axum and hands
//! accepted requests to the pipeline orchestrator as detached tasks.

pub mod handlers;
pub mod server;

pub use server::{router, start_server, GatewayState, ServerConfig};
