// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the Notiva relay.
//!
//! These traits are the seams between the pipeline and its collaborators:
//! the extraction provider, the delivery provider, and the request store.
//! Production implementations live in `notiva-provider` and `notiva-store`;
//! deterministic mocks live in `notiva-test-utils`.

pub mod deliverer;
pub mod extractor;
pub mod store;

pub use deliverer::Deliverer;
pub use extractor::Extractor;
pub use store::RequestStore;
