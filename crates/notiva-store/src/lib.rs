// SPDX-FileCopyrightText: 2026 Notiva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory implementation of [`RequestStore`].
//!
//! Backed by a concurrent keyed map: every operation is an atomic per-entry
//! read-modify-write, and no guard is ever held across an await point, so a
//! slow provider call can never block unrelated status queries. Records do
//! not survive a restart.

use async_trait::async_trait;
use dashmap::DashMap;

use notiva_core::{NotivaError, RequestId, RequestRecord, RequestStatus, RequestStore};

/// Process-local request store keyed by uuid-v4 identifiers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    requests: DashMap<String, RequestRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            requests: DashMap::new(),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[async_trait]
impl RequestStore for MemoryStore {
    async fn create(&self, user_input: String) -> RequestId {
        let id = uuid::Uuid::new_v4().to_string();
        self.requests.insert(
            id.clone(),
            RequestRecord {
                user_input,
                status: RequestStatus::Queued,
            },
        );
        RequestId(id)
    }

    async fn get(&self, id: &RequestId) -> Result<RequestRecord, NotivaError> {
        self.requests
            .get(&id.0)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| NotivaError::NotFound { id: id.0.clone() })
    }

    async fn set_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<(), NotivaError> {
        match self.requests.get_mut(&id.0) {
            Some(mut entry) => {
                entry.value_mut().status = status;
                Ok(())
            }
            None => Err(NotivaError::NotFound { id: id.0.clone() }),
        }
    }
}
