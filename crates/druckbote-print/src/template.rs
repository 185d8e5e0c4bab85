// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Passthrough template renderer.
//
// Hosts with a real template engine inject their own `TemplateRenderer`;
// the CLI treats the path template as already literal.

use async_trait::async_trait;

use druckbote_core::error::Result;
use druckbote_engine::traits::TemplateRenderer;

/// Renders every template to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRenderer;

impl PassthroughRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TemplateRenderer for PassthroughRenderer {
    async fn render(&self, template: &str) -> Result<String> {
        Ok(template.to_string())
    }
}
