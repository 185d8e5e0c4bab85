// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The print pipeline: validate → resolve source → resolve target → dispatch.
//
// One sequential async flow per request, no shared mutable state. The
// staged source is owned by this function between staging and dispatch;
// if target resolution fails the guard drops here and removes any temp
// copy before the error propagates.

use std::sync::Arc;

use tracing::instrument;

use druckbote_core::config::PipelineConfig;
use druckbote_core::error::Result;
use druckbote_core::types::PrintRequest;

use crate::dispatch::dispatch;
use crate::source::resolve_source;
use crate::target::resolve_target;
use crate::traits::{
    ConfigStore, DeviceRegistry, Fetcher, JobRecorder, JobSubmitter, TemplateRenderer,
};
use crate::validate::validate;

/// Orchestrates one print operation end to end.
///
/// All collaborators are injected; the pipeline itself performs no I/O
/// beyond reading and deleting the staged file.
pub struct PrintPipeline {
    renderer: Arc<dyn TemplateRenderer>,
    fetcher: Arc<dyn Fetcher>,
    registry: Arc<dyn DeviceRegistry>,
    configs: Arc<dyn ConfigStore>,
    submitter: Arc<dyn JobSubmitter>,
    recorder: Arc<dyn JobRecorder>,
    config: PipelineConfig,
}

impl PrintPipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        renderer: Arc<dyn TemplateRenderer>,
        fetcher: Arc<dyn Fetcher>,
        registry: Arc<dyn DeviceRegistry>,
        configs: Arc<dyn ConfigStore>,
        submitter: Arc<dyn JobSubmitter>,
        recorder: Arc<dyn JobRecorder>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            renderer,
            fetcher,
            registry,
            configs,
            submitter,
            recorder,
            config,
        }
    }

    /// Execute one print request.
    ///
    /// Exactly one staged source is created per request and consumed by
    /// the dispatcher; its temp copy (if any) is gone by the time this
    /// returns, whatever the outcome.
    #[instrument(skip(self, request), fields(entity_id = %request.entity_id))]
    pub async fn print(&self, request: PrintRequest) -> Result<()> {
        validate(&request)?;

        let source = resolve_source(
            self.renderer.as_ref(),
            self.fetcher.as_ref(),
            &self.config,
            &request,
        )
        .await?;

        // A failure here drops `source`, which removes the temp copy
        // before the error reaches the caller.
        let target =
            resolve_target(self.registry.as_ref(), self.configs.as_ref(), &request.entity_id)
                .await?;

        dispatch(
            &request,
            source,
            &target,
            self.submitter.as_ref(),
            self.recorder.as_ref(),
            &self.config,
        )
        .await
    }
}
