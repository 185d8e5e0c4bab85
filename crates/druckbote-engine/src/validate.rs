// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request validation — fail fast, no side effects.

use druckbote_core::error::{DruckboteError, Result};
use druckbote_core::types::PrintRequest;

/// Check the raw request fields before any I/O happens.
///
/// `copies` has no upper bound; the caller is trusted. Zero copies is
/// rejected because the count must be positive.
pub fn validate(request: &PrintRequest) -> Result<()> {
    if request.entity_id.trim().is_empty() {
        return Err(DruckboteError::Validation("entity_id is required".into()));
    }
    if request.file_path.trim().is_empty() {
        return Err(DruckboteError::Validation("file_path is required".into()));
    }
    if request.copies == 0 {
        return Err(DruckboteError::Validation(
            "copies must be a positive integer".into(),
        ));
    }
    Ok(())
}
