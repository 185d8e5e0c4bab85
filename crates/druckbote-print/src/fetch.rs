// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP document fetcher backed by a shared reqwest client.

use async_trait::async_trait;
use tracing::debug;

use druckbote_core::error::{DruckboteError, Result};
use druckbote_engine::traits::Fetcher;

/// Downloads remote documents over HTTP(S).
///
/// One reqwest client is shared across requests for connection pooling;
/// timeout policy lives in the client, not the pipeline.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DruckboteError::Download(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DruckboteError::Download(format!("{url}: HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DruckboteError::Download(format!("{url}: {e}")))?;

        debug!(url, size = bytes.len(), "fetched document");
        Ok(bytes.to_vec())
    }
}
