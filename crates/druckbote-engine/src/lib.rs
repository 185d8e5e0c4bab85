// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Druckbote Engine — the print-job orchestration pipeline.
//
// A request flows through four stages: validation, source resolution
// (template → staged file, downloading remote sources into a guarded temp
// copy), target resolution (entity id → connection config), and dispatch
// (simulate or transmit, with unconditional cleanup). All I/O-bearing
// collaborators are trait objects defined in `traits`.

pub mod dispatch;
pub mod pipeline;
pub mod source;
pub mod target;
pub mod traits;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use pipeline::PrintPipeline;
pub use source::{SourceKind, StagedSource};
