// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Collaborator interfaces consumed by the pipeline.
//
// The engine never talks to a template engine, a device registry, the
// network, or a printer directly. Each of those is an injected capability,
// so the whole pipeline runs deterministically under test with in-memory
// fakes and the host decides what the real implementations look like.

use async_trait::async_trait;

use druckbote_core::error::Result;
use druckbote_core::types::{ConfigEntry, JobPayload, JobRecord, RegistryEntry, TargetConfig};

/// Evaluates a path template into a literal string.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` to its final string form.
    ///
    /// Fails with a `Template` error on malformed input.
    async fn render(&self, template: &str) -> Result<String>;
}

/// Maps an entity identifier to its registry entry.
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    /// Look up an entity. `Ok(None)` means the entity is unknown.
    async fn resolve(&self, entity_id: &str) -> Result<Option<RegistryEntry>>;
}

/// Looks up stored config entries by id.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetch a config entry. `Ok(None)` means no such entry exists.
    async fn entry(&self, config_entry_id: &str) -> Result<Option<ConfigEntry>>;
}

/// Downloads remote documents.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return the response body.
    ///
    /// Fails with a `Download` error on network failure or a non-2xx
    /// status. An empty body is not an error.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Submits a job to a printer over the wire protocol.
///
/// Implementations construct a fresh protocol client from the target
/// config on every call; connection parameters are never cached across
/// requests.
#[async_trait]
pub trait JobSubmitter: Send + Sync {
    async fn submit(&self, target: &TargetConfig, payload: JobPayload) -> Result<()>;
}

/// Records the most recent job outcome for observability.
///
/// Fire-and-forget: the pipeline does not depend on any return value and
/// the store is expected to serialize its own writes.
#[async_trait]
pub trait JobRecorder: Send + Sync {
    async fn set_last_job(&self, record: JobRecord);
}
