// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Job dispatch — simulate or transmit, then clean up no matter what.
//
// The dispatcher owns the staged source for the rest of the operation.
// `execute` runs the fallible body, then `cleanup` runs unconditionally
// before the outcome propagates; the guard's `Drop` covers panics too.
// Recording the job outcome happens inside the body, so it always precedes
// cleanup.

use tracing::{error, info, instrument};

use druckbote_core::config::PipelineConfig;
use druckbote_core::error::{DruckboteError, Result};
use druckbote_core::types::{
    DOCUMENT_FORMAT_PDF, JobPayload, JobRecord, JobStatus, PrintRequest, TargetConfig,
};

use crate::source::StagedSource;
use crate::traits::{JobRecorder, JobSubmitter};

/// Run the dispatch stage: simulation branch or real transmission.
///
/// Consumes the staged source and guarantees its cleanup on every exit
/// path, success or failure.
#[instrument(
    skip_all,
    fields(entity_id = %request.entity_id, source = %source.display_label(), copies = request.copies)
)]
pub async fn dispatch(
    request: &PrintRequest,
    mut source: StagedSource,
    target: &TargetConfig,
    submitter: &dyn JobSubmitter,
    recorder: &dyn JobRecorder,
    config: &PipelineConfig,
) -> Result<()> {
    let outcome = execute(request, &source, target, submitter, recorder, config).await;
    source.cleanup();
    outcome
}

async fn execute(
    request: &PrintRequest,
    source: &StagedSource,
    target: &TargetConfig,
    submitter: &dyn JobSubmitter,
    recorder: &dyn JobRecorder,
    config: &PipelineConfig,
) -> Result<()> {
    if target.simulation_mode {
        info!(
            copies = request.copies,
            "simulation mode active, job recorded without transmission"
        );
        recorder
            .set_last_job(JobRecord::new(
                &request.entity_id,
                source.display_label(),
                request.copies,
                JobStatus::Simulated,
            ))
            .await;
        return Ok(());
    }

    let document = match tokio::fs::read(source.path()).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let wrapped =
                DruckboteError::Print(format!("reading {}: {e}", source.path().display()));
            error!("print job failed: {wrapped}");
            record_failure(recorder, request, source, &wrapped).await;
            return Err(wrapped);
        }
    };

    info!(
        copies = request.copies,
        host = %target.host,
        port = target.port,
        base_path = %target.base_path,
        tls = target.tls,
        size = document.len(),
        "submitting print job"
    );

    let payload = JobPayload {
        requesting_user: config.requesting_user.clone(),
        job_name: config.job_name.clone(),
        document_format: DOCUMENT_FORMAT_PDF,
        copies: request.copies,
        document,
    };

    match submitter.submit(target, payload).await {
        Ok(()) => {
            info!(copies = request.copies, "print job accepted");
            recorder
                .set_last_job(JobRecord::new(
                    &request.entity_id,
                    source.display_label(),
                    request.copies,
                    JobStatus::Success,
                ))
                .await;
            Ok(())
        }
        Err(e) => {
            error!("print job failed: {e}");
            let wrapped = match e {
                e @ DruckboteError::Print(_) => e,
                other => DruckboteError::Print(other.to_string()),
            };
            record_failure(recorder, request, source, &wrapped).await;
            Err(wrapped)
        }
    }
}

/// Write a `Failed` record for a dispatch-stage failure.
async fn record_failure(
    recorder: &dyn JobRecorder,
    request: &PrintRequest,
    source: &StagedSource,
    err: &DruckboteError,
) {
    recorder
        .set_last_job(
            JobRecord::new(
                &request.entity_id,
                source.display_label(),
                request.copies,
                JobStatus::Failed,
            )
            .with_error_kind(err.kind()),
        )
        .await;
}
