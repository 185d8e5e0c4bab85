// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Druckbote.
//
// Every failure a print operation can surface maps to exactly one variant
// here, so callers can tell a bad request from a dead network from a printer
// that rejected the job. Cleanup-phase failures are never represented — they
// are logged and discarded at the site where they occur.

use thiserror::Error;

/// Top-level error type for all Druckbote operations.
#[derive(Debug, Error)]
pub enum DruckboteError {
    /// Missing or malformed request fields.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The path template could not be rendered.
    #[error("template rendering failed: {0}")]
    Template(String),

    /// Network or HTTP failure while fetching a remote document.
    #[error("download failed: {0}")]
    Download(String),

    /// Local file absent, target unresolvable, or linked config missing.
    #[error("not found: {0}")]
    NotFound(String),

    /// The target resolves to a config entry outside Druckbote's domain.
    #[error("wrong domain: {0}")]
    WrongDomain(String),

    /// File read or protocol submission failure, wrapping the cause.
    #[error("print failed: {0}")]
    Print(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DruckboteError {
    /// Short stable keyword for this error kind, used in job records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Template(_) => "template",
            Self::Download(_) => "download",
            Self::NotFound(_) => "not_found",
            Self::WrongDomain(_) => "wrong_domain",
            Self::Print(_) => "print",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DruckboteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_causes() {
        let download = DruckboteError::Download("HTTP 404 for https://x/doc.pdf".into());
        let not_found = DruckboteError::NotFound("file /tmp/missing.pdf".into());
        assert!(download.to_string().contains("download failed"));
        assert!(not_found.to_string().contains("not found"));
        assert_ne!(download.kind(), not_found.kind());
    }
}
