// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Source resolution — turn a path template into a staged, readable file.
//
// The rendered template is classified exactly once into a `SourceKind`;
// nothing downstream re-inspects the string. Remote sources are downloaded
// into a uniquely named temp file wrapped in a `StagedSource` guard whose
// cleanup is idempotent and backstopped by `Drop`, so no exit path of the
// operation can leak the staged copy.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use druckbote_core::config::PipelineConfig;
use druckbote_core::error::{DruckboteError, Result};
use druckbote_core::types::PrintRequest;

use crate::traits::{Fetcher, TemplateRenderer};

/// Classification of a rendered path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// `http://` or `https://` — must be downloaded before printing.
    Url(String),
    /// Anything else — a path on the local filesystem.
    LocalFile(PathBuf),
}

/// Classify a rendered path as remote URL or bare filesystem path.
pub fn classify(path: &str) -> SourceKind {
    if path.starts_with("http://") || path.starts_with("https://") {
        SourceKind::Url(path.to_string())
    } else {
        SourceKind::LocalFile(PathBuf::from(path))
    }
}

/// Resolve an instance-relative path against the internal base URL.
///
/// The path gains a leading `/` if it lacks one (never doubled), and the
/// base URL loses any trailing `/` before joining. The base URL points at
/// a loopback address so local-path printing never leaves the host.
pub fn localize(raw_path: &str, internal_base_url: &str) -> String {
    let base = internal_base_url.trim_end_matches('/');
    if raw_path.starts_with('/') {
        format!("{base}{raw_path}")
    } else {
        format!("{base}/{raw_path}")
    }
}

/// A concrete, readable document source prepared for dispatch.
///
/// When `temporary` is true the file at `path` was created by this
/// resolver and is deleted by [`StagedSource::cleanup`] (or on drop);
/// otherwise the file belongs to the user and is never touched.
#[derive(Debug)]
pub struct StagedSource {
    path: PathBuf,
    /// Original user-facing path or URL, for logs and job records.
    display: String,
    temporary: bool,
    cleaned: bool,
}

impl StagedSource {
    fn original(path: PathBuf, display: String) -> Self {
        Self {
            path,
            display,
            temporary: false,
            cleaned: false,
        }
    }

    fn temp_copy(path: PathBuf, display: String) -> Self {
        Self {
            path,
            display,
            temporary: true,
            cleaned: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_label(&self) -> &str {
        &self.display
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    /// Delete the staged temp copy, if there is one.
    ///
    /// Idempotent: repeated calls (and a call racing the file's absence)
    /// are no-ops. Deletion failures are logged and never surfaced — the
    /// primary outcome of the operation must not be masked by cleanup.
    pub fn cleanup(&mut self) {
        if self.cleaned || !self.temporary {
            self.cleaned = true;
            return;
        }
        self.cleaned = true;
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed temporary file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.path.display(),
                "failed to remove temporary file: {e}"
            ),
        }
    }
}

impl Drop for StagedSource {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Resolve a request's path template into a [`StagedSource`].
///
/// Renders the template, applies local-path normalization, classifies the
/// result, and either downloads-and-stages (URL) or verifies existence
/// (bare path). On any failure nothing is left behind on disk.
pub async fn resolve_source(
    renderer: &dyn TemplateRenderer,
    fetcher: &dyn Fetcher,
    config: &PipelineConfig,
    request: &PrintRequest,
) -> Result<StagedSource> {
    let rendered = renderer.render(&request.file_path).await?;
    if rendered.trim().is_empty() {
        return Err(DruckboteError::Validation(
            "file_path rendered to an empty string".into(),
        ));
    }

    let candidate = if request.is_local_path {
        let url = localize(&rendered, &config.internal_base_url);
        debug!(path = %rendered, url = %url, "converted local path to internal URL");
        url
    } else {
        rendered
    };

    match classify(&candidate) {
        SourceKind::Url(url) => stage_download(fetcher, &url).await,
        SourceKind::LocalFile(path) => {
            if !path.exists() {
                return Err(DruckboteError::NotFound(format!(
                    "file {} does not exist",
                    path.display()
                )));
            }
            Ok(StagedSource::original(path, candidate))
        }
    }
}

/// Download `url` and persist the body into a fresh `.pdf` temp file.
///
/// The temp file only survives the function once the body is fully
/// written; any earlier failure lets `NamedTempFile` remove it. A
/// zero-byte body is staged as a valid, empty document.
async fn stage_download(fetcher: &dyn Fetcher, url: &str) -> Result<StagedSource> {
    let bytes = fetcher.fetch(url).await?;

    let tmp = tempfile::Builder::new()
        .prefix("druckbote-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| DruckboteError::Download(format!("staging download from {url}: {e}")))?;

    let mut handle = tmp.as_file();
    handle
        .write_all(&bytes)
        .map_err(|e| DruckboteError::Download(format!("staging download from {url}: {e}")))?;

    let (_file, path) = tmp
        .keep()
        .map_err(|e| DruckboteError::Download(format!("staging download from {url}: {e}")))?;

    info!(url, path = %path.display(), size = bytes.len(), "downloaded document to temporary file");
    Ok(StagedSource::temp_copy(path, url.to_string()))
}
