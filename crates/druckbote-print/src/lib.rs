// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Druckbote Print — production implementations of the pipeline's
// collaborator traits: IPP submission, HTTP fetching, the device roster,
// the last-job store, and the passthrough template renderer.

pub mod fetch;
pub mod ipp_submitter;
pub mod last_job;
pub mod roster;
pub mod template;

pub use fetch::HttpFetcher;
pub use ipp_submitter::IppSubmitter;
pub use last_job::LastJobStore;
pub use roster::Roster;
pub use template::PassthroughRenderer;
