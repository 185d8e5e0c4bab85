// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File-backed device roster.
//
// A JSON file declaring the registered printer devices stands in for a
// live registry: it serves both the entity lookup and the config-entry
// lookup the pipeline consumes. The roster is loaded once; resolution
// still happens per request against the loaded snapshot.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use druckbote_core::error::Result;
use druckbote_core::types::{ConfigEntry, DOMAIN, RegistryEntry, TargetConfig};
use druckbote_engine::traits::{ConfigStore, DeviceRegistry};

fn default_domain() -> String {
    DOMAIN.to_string()
}

/// One declared device in the roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterDevice {
    pub entity_id: String,
    pub config_entry_id: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    pub target: TargetConfig,
}

/// The roster file's top-level shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterFile {
    devices: Vec<RosterDevice>,
}

/// Device roster acting as registry and config store.
#[derive(Debug)]
pub struct Roster {
    by_entity: HashMap<String, RosterDevice>,
    by_entry: HashMap<String, RosterDevice>,
}

impl Roster {
    /// Load a roster from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let roster = Self::from_json(&raw)?;
        info!(
            path = %path.as_ref().display(),
            devices = roster.by_entity.len(),
            "device roster loaded"
        );
        Ok(roster)
    }

    /// Parse a roster from its JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: RosterFile = serde_json::from_str(raw)?;
        let mut by_entity = HashMap::new();
        let mut by_entry = HashMap::new();
        for device in file.devices {
            by_entry.insert(device.config_entry_id.clone(), device.clone());
            by_entity.insert(device.entity_id.clone(), device);
        }
        Ok(Self {
            by_entity,
            by_entry,
        })
    }
}

#[async_trait]
impl DeviceRegistry for Roster {
    async fn resolve(&self, entity_id: &str) -> Result<Option<RegistryEntry>> {
        Ok(self.by_entity.get(entity_id).map(|device| RegistryEntry {
            config_entry_id: Some(device.config_entry_id.clone()),
        }))
    }
}

#[async_trait]
impl ConfigStore for Roster {
    async fn entry(&self, config_entry_id: &str) -> Result<Option<ConfigEntry>> {
        Ok(self.by_entry.get(config_entry_id).map(|device| ConfigEntry {
            domain: device.domain.clone(),
            target: device.target.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "devices": [
            {
                "entity_id": "printer.office",
                "config_entry_id": "office-1",
                "target": {
                    "host": "192.168.1.50",
                    "port": 631,
                    "base_path": "/ipp/print",
                    "simulation_mode": true
                }
            }
        ]
    }"#;

    #[tokio::test]
    async fn resolves_declared_entity() {
        let roster = Roster::from_json(SAMPLE).expect("parse");

        let entry = roster
            .resolve("printer.office")
            .await
            .expect("resolve")
            .expect("present");
        assert_eq!(entry.config_entry_id.as_deref(), Some("office-1"));

        let config = roster
            .entry("office-1")
            .await
            .expect("entry")
            .expect("present");
        assert_eq!(config.domain, DOMAIN);
        assert_eq!(config.target.host, "192.168.1.50");
        assert!(config.target.simulation_mode);
        assert!(config.target.verify_tls, "serde default applies");
    }

    #[tokio::test]
    async fn unknown_lookups_return_none() {
        let roster = Roster::from_json(SAMPLE).expect("parse");
        assert!(roster.resolve("printer.ghost").await.expect("ok").is_none());
        assert!(roster.entry("nope").await.expect("ok").is_none());
    }

    #[test]
    fn malformed_roster_is_a_serialization_error() {
        let err = Roster::from_json("{ not json").expect_err("must fail");
        assert!(matches!(
            err,
            druckbote_core::error::DruckboteError::Serialization(_)
        ));
    }
}
