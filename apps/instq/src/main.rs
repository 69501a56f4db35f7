//! instq - batch package installer with a notification surface
//!
//! The CLI wires the install engine to a terminal: the channel sink becomes
//! a rendered transcript, the job runs on a dedicated blocking context, and
//! the final report is printed as a table or JSON.

mod cli;
mod config;
mod display;
mod error;
mod installer;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::installer::{CommandInstaller, FileNameResolver, TerminalNotice};
use clap::Parser;
use instq_install::InstallJob;
use instq_notify::NotificationSink;
use instq_types::{InstallRequest, PackageFile};
use std::process;
use std::sync::Arc;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;
    init_tracing(cli.global.debug);

    match run(cli).await {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            error!("application error: {e}");
            if !json_mode {
                eprintln!("Error: {e}");
            }
            process::exit(2);
        }
    }
}

/// Main application logic. Returns the process exit code: 0 when every item
/// installed, 1 when the job completed with item failures.
async fn run(cli: Cli) -> Result<i32, CliError> {
    let config = Config::load_or_default(cli.global.config.as_deref()).await?;

    match cli.command {
        Commands::Install {
            files,
            title,
            installer,
        } => {
            let command = installer
                .or_else(|| config.installer.command.clone())
                .ok_or_else(|| {
                    CliError::config("no installer command; pass --installer or set [installer] command")
                })?;

            let request = InstallRequest::new(title, files.into_iter().map(PackageFile::from).collect())
                .map_err(instq_errors::Error::from)?;

            let (sink, mut rx) = instq_notify::channel();
            let renderer = OutputRenderer::new(cli.global.json);

            let event_renderer = renderer.clone();
            let display_task = tokio::spawn(async move {
                while let Some(message) = rx.recv().await {
                    display::log_event(&message);
                    if let Err(e) = event_renderer.render_event(&message) {
                        error!("render error: {e}");
                    }
                }
            });

            let mut job = InstallJob::new(
                request,
                Arc::new(CommandInstaller::new(command)),
                Arc::new(FileNameResolver),
                Arc::new(TerminalNotice::new()),
                Arc::new(sink) as Arc<dyn NotificationSink>,
                &config.job_config(),
            );

            // One dedicated blocking context per job; the installer occupies
            // it for the duration of each item
            let report = tokio::task::spawn_blocking(move || job.run())
                .await
                .map_err(|e| CliError::config(format!("job panicked: {e}")))?;

            // The job (and its sink handle) is gone, so the channel drains
            // to completion
            let _ = display_task.await;

            renderer.render_report(&report)?;
            Ok(i32::from(report.failed() > 0))
        }
    }
}

fn init_tracing(debug_enabled: bool) {
    let default_filter = if debug_enabled { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
