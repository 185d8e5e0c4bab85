// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory last-job store.
//
// Holds the record of the most recent print operation for observability
// surfaces (status output, frontend cards). Overwritten once per request;
// the mutex serializes writes from concurrent operations.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use druckbote_core::types::JobRecord;
use druckbote_engine::traits::JobRecorder;

/// Thread-safe store of the most recent [`JobRecord`].
#[derive(Debug, Default)]
pub struct LastJobStore {
    last: Mutex<Option<JobRecord>>,
}

impl LastJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the last recorded job, if any.
    pub fn last_job(&self) -> Option<JobRecord> {
        self.last.lock().expect("last-job lock poisoned").clone()
    }
}

#[async_trait]
impl JobRecorder for LastJobStore {
    async fn set_last_job(&self, record: JobRecord) {
        debug!(
            entity_id = %record.entity_id,
            status = %record.status,
            "recording last job"
        );
        *self.last.lock().expect("last-job lock poisoned") = Some(record);
    }
}
