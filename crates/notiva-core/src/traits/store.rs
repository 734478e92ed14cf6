// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request store trait: concurrency-safe mapping from request id to record.

use async_trait::async_trait;

use crate::error::NotivaError;
use crate::types::{RequestId, RequestRecord, RequestStatus};

/// Concurrency-safe keyed store of request records.
///
/// Each operation is atomic with respect to the others: readers never observe
/// a partially-written record, and same-key writes are mutually exclusive at
/// the granularity of a single read-modify-write. Implementations must not
/// hold any internal guard across an await point.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Allocates a fresh identifier and inserts a record in `Queued` status.
    async fn create(&self, user_input: String) -> RequestId;

    /// Returns a snapshot of the record, or `NotFound`.
    async fn get(&self, id: &RequestId) -> Result<RequestRecord, NotivaError>;

    /// Overwrites the status of an existing record, or `NotFound`.
    async fn set_status(&self, id: &RequestId, status: RequestStatus)
        -> Result<(), NotivaError>;
}
