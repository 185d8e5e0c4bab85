// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Settings for the print pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Base URL of this instance, used to resolve `is_local_path` requests.
    /// Must point at a loopback or internal address: local-path printing is
    /// never routed through an external network hop.
    pub internal_base_url: String,
    /// Value of the `requesting-user-name` attribute on submitted jobs.
    pub requesting_user: String,
    /// Value of the `job-name` attribute on submitted jobs.
    pub job_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            internal_base_url: "http://127.0.0.1:8123".into(),
            requesting_user: "Druckbote".into(),
            job_name: "Druckbote Document".into(),
        }
    }
}
