// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Druckbote print dispatcher.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Config-entry domain managed by this system. Targets whose config entry
/// belongs to any other domain are rejected during target resolution.
pub const DOMAIN: &str = "druckbote";

/// MIME type sent as `document-format` for every submitted job.
pub const DOCUMENT_FORMAT_PDF: &str = "application/pdf";

fn default_copies() -> u32 {
    1
}

/// An incoming print command, one per invocation.
///
/// `file_path` is a template string; it is rendered by the host's template
/// evaluator before classification. Field names match the inbound
/// service-call shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintRequest {
    /// Opaque identifier of the registered printer device.
    pub entity_id: String,
    /// Path template resolving to a local path or a remote URL.
    pub file_path: String,
    /// Treat the rendered path as relative to the instance's internal
    /// base URL rather than the local filesystem.
    #[serde(default)]
    pub is_local_path: bool,
    /// Number of copies to print.
    #[serde(default = "default_copies")]
    pub copies: u32,
}

/// Connection parameters for one printer target, resolved fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub host: String,
    pub port: u16,
    /// IPP endpoint path on the device (e.g. "/ipp/print").
    #[serde(default)]
    pub base_path: String,
    #[serde(default)]
    pub tls: bool,
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// When set, jobs are recorded but never transmitted to the device.
    #[serde(default)]
    pub simulation_mode: bool,
}

fn default_verify_tls() -> bool {
    true
}

/// A registry row linking an entity to its config entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub config_entry_id: Option<String>,
}

/// A stored config entry: the owning domain plus connection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub domain: String,
    pub target: TargetConfig,
}

/// Outcome of one print operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Simulation mode — no device transmission occurred.
    Simulated,
    /// The device accepted the job.
    Success,
    /// File read or protocol submission failed.
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Record of the most recent job, written once per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub entity_id: String,
    /// The original user-facing path or URL, not the staged temp path.
    pub file_path: String,
    pub copies: u32,
    pub timestamp: DateTime<Utc>,
    pub status: JobStatus,
    /// Error kind keyword when `status` is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl JobRecord {
    pub fn new(entity_id: &str, file_path: &str, copies: u32, status: JobStatus) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            file_path: file_path.to_string(),
            copies,
            timestamp: Utc::now(),
            status,
            error_kind: None,
        }
    }

    pub fn with_error_kind(mut self, kind: &str) -> Self {
        self.error_kind = Some(kind.to_string());
        self
    }
}

/// Structured payload handed to the protocol client.
#[derive(Debug, Clone)]
pub struct JobPayload {
    /// `requesting-user-name` operation attribute.
    pub requesting_user: String,
    /// `job-name` operation attribute.
    pub job_name: String,
    /// `document-format` MIME type.
    pub document_format: &'static str,
    pub copies: u32,
    /// Raw document bytes. May be empty — zero-byte documents are valid.
    pub document: Vec<u8>,
}
