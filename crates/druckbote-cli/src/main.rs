// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Druckbote CLI — one-shot print dispatch against a JSON device roster.
//
// Entry point. Initialises logging, loads the roster, wires the real
// collaborators into the pipeline, and runs a single print command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use druckbote_core::config::PipelineConfig;
use druckbote_core::error::Result;
use druckbote_core::types::PrintRequest;
use druckbote_engine::PrintPipeline;
use druckbote_print::{HttpFetcher, IppSubmitter, LastJobStore, PassthroughRenderer, Roster};

#[derive(Debug, Parser)]
#[command(name = "druckbote", version, about = "Dispatch print jobs to rostered IPP printers")]
struct Cli {
    /// Path to the JSON device roster.
    #[arg(long, default_value = "devices.json")]
    roster: PathBuf,

    /// Internal base URL used to resolve --is-local-path requests.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a document on a rostered device.
    Print {
        /// Entity id of the target device (e.g. printer.office).
        #[arg(long)]
        entity_id: String,

        /// Document path or URL (a template on hosts with a template engine).
        #[arg(long)]
        file_path: String,

        /// Resolve the path against the internal base URL instead of the
        /// local filesystem.
        #[arg(long)]
        is_local_path: bool,

        /// Number of copies.
        #[arg(long, default_value_t = 1)]
        copies: u32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let roster = Arc::new(Roster::load(&cli.roster)?);
    let recorder = Arc::new(LastJobStore::new());

    let mut config = PipelineConfig::default();
    if let Some(base_url) = cli.base_url {
        config.internal_base_url = base_url;
    }

    let pipeline = PrintPipeline::new(
        Arc::new(PassthroughRenderer::new()),
        Arc::new(HttpFetcher::new()),
        roster.clone(),
        roster,
        Arc::new(IppSubmitter::new()),
        recorder.clone(),
        config,
    );

    match cli.command {
        Command::Print {
            entity_id,
            file_path,
            is_local_path,
            copies,
        } => {
            pipeline
                .print(PrintRequest {
                    entity_id,
                    file_path,
                    is_local_path,
                    copies,
                })
                .await?;

            if let Some(record) = recorder.last_job() {
                info!(status = %record.status, "print operation finished");
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
            Ok(())
        }
    }
}
