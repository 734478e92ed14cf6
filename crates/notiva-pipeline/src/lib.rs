// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Notiva extraction-and-delivery pipeline.
//!
//! Builds the extraction prompt, repairs and validates the provider's
//! semi-structured output, and orchestrates one request's lifecycle from
//! `processing` to a terminal `sent` or `failed`.

pub mod orchestrator;
pub mod prompt;
pub mod repair;

pub use orchestrator::Orchestrator;
pub use prompt::build_prompt;
pub use repair::repair_and_validate;
