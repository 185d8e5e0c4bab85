// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IPP job submission via the `ipp` crate's async API.
//
// A fresh client is built from the target config on every call — connection
// parameters come from a per-request registry snapshot and are never reused.
// Sends Print-Job (RFC 8011 §4.2.1) with requesting-user-name, job-name,
// document-format, and copies operation attributes.

use std::io::Cursor;

use async_trait::async_trait;
use ipp::prelude::*;
use tracing::{error, info};

use druckbote_core::error::{DruckboteError, Result};
use druckbote_core::types::{JobPayload, TargetConfig};
use druckbote_engine::traits::JobSubmitter;

/// Submits print jobs over IPP.
///
/// Stateless: all connection parameters arrive with each call.
#[derive(Debug, Default)]
pub struct IppSubmitter;

impl IppSubmitter {
    pub fn new() -> Self {
        Self
    }
}

/// Build the printer URI for a target config.
///
/// TLS targets get the `ipps` scheme; credentials, when present, travel in
/// the URI's userinfo component for HTTP Basic auth.
fn printer_uri(target: &TargetConfig) -> Result<Uri> {
    let scheme = if target.tls { "ipps" } else { "ipp" };

    let userinfo = match (&target.username, &target.password) {
        (Some(user), Some(pass)) => format!("{user}:{pass}@"),
        (Some(user), None) => format!("{user}@"),
        _ => String::new(),
    };

    let path = if target.base_path.is_empty() || target.base_path.starts_with('/') {
        target.base_path.clone()
    } else {
        format!("/{}", target.base_path)
    };

    let uri = format!(
        "{scheme}://{userinfo}{}:{}{}",
        target.host, target.port, path
    );
    uri.parse()
        .map_err(|e| DruckboteError::Print(format!("invalid printer URI '{uri}': {e}")))
}

#[async_trait]
impl JobSubmitter for IppSubmitter {
    async fn submit(&self, target: &TargetConfig, payload: JobPayload) -> Result<()> {
        let uri = printer_uri(target)?;

        let copies = i32::try_from(payload.copies)
            .map_err(|_| DruckboteError::Print(format!("copies out of range: {}", payload.copies)))?;

        let document = IppPayload::new(Cursor::new(payload.document));
        let operation = IppOperationBuilder::print_job(uri.clone(), document)
            .user_name(&payload.requesting_user)
            .job_title(&payload.job_name)
            .document_format(payload.document_format)
            .attribute(IppAttribute::new("copies", IppValue::Integer(copies)))
            .build();

        let client = AsyncIppClient::builder(uri.clone())
            .ignore_tls_errors(!target.verify_tls)
            .build();

        info!(uri = %uri, copies, "sending Print-Job");
        let response = client
            .send(operation)
            .await
            .map_err(|e| DruckboteError::Print(format!("Print-Job: {e}")))?;

        if !response.header().status_code().is_success() {
            let code = response.header().status_code();
            error!(status = ?code, "Print-Job failed");
            return Err(DruckboteError::Print(format!(
                "Print-Job returned status {code:?}"
            )));
        }

        info!("print job accepted by printer");
        Ok(())
    }
}
