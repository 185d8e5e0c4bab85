// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Target resolution — entity id to connection config.
//
// Four distinct failures, in lookup order: unknown entity, entity without
// a linked config entry, missing config entry, and a config entry owned by
// a different domain. The config is a fresh snapshot per request; nothing
// is cached here.

use tracing::debug;

use druckbote_core::error::{DruckboteError, Result};
use druckbote_core::types::{DOMAIN, TargetConfig};

use crate::traits::{ConfigStore, DeviceRegistry};

/// Resolve `entity_id` to the target's connection config.
pub async fn resolve_target(
    registry: &dyn DeviceRegistry,
    configs: &dyn ConfigStore,
    entity_id: &str,
) -> Result<TargetConfig> {
    let entry = registry
        .resolve(entity_id)
        .await?
        .ok_or_else(|| DruckboteError::NotFound(format!("entity not found: {entity_id}")))?;

    let config_entry_id = entry.config_entry_id.ok_or_else(|| {
        DruckboteError::NotFound(format!("entity {entity_id} is not linked to a config entry"))
    })?;

    let config_entry = configs.entry(&config_entry_id).await?.ok_or_else(|| {
        DruckboteError::NotFound(format!("config entry not found for {entity_id}"))
    })?;

    if config_entry.domain != DOMAIN {
        return Err(DruckboteError::WrongDomain(format!(
            "entity {entity_id} belongs to domain '{}', not '{DOMAIN}'",
            config_entry.domain
        )));
    }

    debug!(
        entity_id,
        host = %config_entry.target.host,
        simulation = config_entry.target.simulation_mode,
        "resolved target config"
    );
    Ok(config_entry.target)
}
