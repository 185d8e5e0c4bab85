// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory fakes for the collaborator traits, shared across test modules.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use druckbote_core::error::{DruckboteError, Result};
use druckbote_core::types::{ConfigEntry, JobPayload, JobRecord, RegistryEntry, TargetConfig};

use crate::traits::{
    ConfigStore, DeviceRegistry, Fetcher, JobRecorder, JobSubmitter, TemplateRenderer,
};

/// Template renderer backed by a fixed lookup table.
///
/// Unknown templates render to themselves, which matches hosts where the
/// "template" is already a literal path.
pub struct MapRenderer {
    renderings: HashMap<String, String>,
    fail: bool,
}

impl MapRenderer {
    pub fn identity() -> Self {
        Self {
            renderings: HashMap::new(),
            fail: false,
        }
    }

    pub fn single(template: &str, rendered: &str) -> Self {
        let mut renderings = HashMap::new();
        renderings.insert(template.to_string(), rendered.to_string());
        Self {
            renderings,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            renderings: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl TemplateRenderer for MapRenderer {
    async fn render(&self, template: &str) -> Result<String> {
        if self.fail {
            return Err(DruckboteError::Template(format!(
                "malformed template: {template}"
            )));
        }
        Ok(self
            .renderings
            .get(template)
            .cloned()
            .unwrap_or_else(|| template.to_string()))
    }
}

/// Fetcher that always serves the same body and counts invocations.
pub struct StaticFetcher {
    body: Vec<u8>,
    calls: AtomicUsize,
    last_url: Mutex<Option<String>>,
}

impl StaticFetcher {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            calls: AtomicUsize::new(0),
            last_url: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().expect("last_url lock").clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().expect("last_url lock") = Some(url.to_string());
        Ok(self.body.clone())
    }
}

/// Fetcher that always fails, as a dead host or 4xx/5xx response would.
pub struct FailingFetcher {
    message: String,
    calls: AtomicUsize,
}

impl FailingFetcher {
    pub fn http_404() -> Self {
        Self {
            message: "HTTP 404 Not Found".into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for FailingFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DruckboteError::Download(format!(
            "{url}: {}",
            self.message
        )))
    }
}

/// Registry with a fixed set of entries.
pub struct StaticRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl StaticRegistry {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_entry(entity_id: &str, entry: RegistryEntry) -> Self {
        let mut entries = HashMap::new();
        entries.insert(entity_id.to_string(), entry);
        Self { entries }
    }

    pub fn linking(entity_id: &str, config_entry_id: &str) -> Self {
        Self::with_entry(
            entity_id,
            RegistryEntry {
                config_entry_id: Some(config_entry_id.to_string()),
            },
        )
    }
}

#[async_trait]
impl DeviceRegistry for StaticRegistry {
    async fn resolve(&self, entity_id: &str) -> Result<Option<RegistryEntry>> {
        Ok(self.entries.get(entity_id).cloned())
    }
}

/// Config store with a fixed set of entries.
pub struct StaticConfigStore {
    entries: HashMap<String, ConfigEntry>,
}

impl StaticConfigStore {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_entry(config_entry_id: &str, entry: ConfigEntry) -> Self {
        let mut entries = HashMap::new();
        entries.insert(config_entry_id.to_string(), entry);
        Self { entries }
    }
}

#[async_trait]
impl ConfigStore for StaticConfigStore {
    async fn entry(&self, config_entry_id: &str) -> Result<Option<ConfigEntry>> {
        Ok(self.entries.get(config_entry_id).cloned())
    }
}

/// Submitter that captures payloads and either accepts or rejects them.
pub struct CapturingSubmitter {
    fail_with: Option<String>,
    calls: AtomicUsize,
    last_payload: Mutex<Option<JobPayload>>,
}

impl CapturingSubmitter {
    pub fn succeeding() -> Self {
        Self {
            fail_with: None,
            calls: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<JobPayload> {
        self.last_payload.lock().expect("payload lock").clone()
    }
}

#[async_trait]
impl JobSubmitter for CapturingSubmitter {
    async fn submit(&self, _target: &TargetConfig, payload: JobPayload) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().expect("payload lock") = Some(payload);
        match &self.fail_with {
            Some(message) => Err(DruckboteError::Print(message.clone())),
            None => Ok(()),
        }
    }
}

/// Recorder that keeps the last record for assertions.
pub struct CapturingRecorder {
    last: Mutex<Option<JobRecord>>,
}

impl CapturingRecorder {
    pub fn new() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }

    pub fn last(&self) -> Option<JobRecord> {
        self.last.lock().expect("record lock").clone()
    }
}

#[async_trait]
impl JobRecorder for CapturingRecorder {
    async fn set_last_job(&self, record: JobRecord) {
        *self.last.lock().expect("record lock") = Some(record);
    }
}
