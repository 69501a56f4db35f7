//! Output rendering and structured logging for sink events

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::{style, Term};
use instq_notify::{SinkEvent, SinkMessage};
use instq_types::JobReport;
use std::io;
use tracing::{debug, info, warn};

/// Output renderer for notification events and the final report
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self {
            json_output,
            term: Term::stdout(),
        }
    }

    /// Render one sink event as it arrives
    pub fn render_event(&self, message: &SinkMessage) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string(message).map_err(io::Error::other)?;
            self.term.write_line(&json)?;
            return Ok(());
        }
        match &message.event {
            SinkEvent::Progress { progress, .. } => {
                let text = progress.text.as_deref().unwrap_or(&progress.title);
                self.term.write_line(&format!(
                    "{} {text} [{}/{}]",
                    style("::").cyan(),
                    progress.completed,
                    progress.total
                ))?;
            }
            SinkEvent::Status { descriptor, .. } => {
                let marker = if descriptor.kind.is_error() {
                    style("failed").red().bold()
                } else {
                    style("ok").green().bold()
                };
                self.term
                    .write_line(&format!("{marker} {}", descriptor.body))?;
            }
            // The summary and cancellations shape the notification surface,
            // not the terminal transcript
            SinkEvent::Summary { .. } | SinkEvent::Cancelled { .. } => {}
        }
        Ok(())
    }

    /// Render the final job report
    pub fn render_report(&self, report: &JobReport) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
            self.term.write_line(&json)?;
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Package", "Result", "Message"]);
        for outcome in &report.outcomes {
            let result_cell = if outcome.kind.is_error() {
                Cell::new(outcome.kind.to_string()).fg(Color::Red)
            } else {
                Cell::new(outcome.kind.to_string()).fg(Color::Green)
            };
            table.add_row(vec![
                Cell::new(&outcome.display_name),
                result_cell,
                Cell::new(&outcome.message),
            ]);
        }
        self.term.write_line(&table.to_string())?;
        self.term.write_line(&format!(
            "{} installed, {} failed",
            report.succeeded(),
            report.failed()
        ))?;
        Ok(())
    }
}

/// Log a sink event with structured fields at its routed severity
pub fn log_event(message: &SinkMessage) {
    match &message.event {
        SinkEvent::Progress { id, progress } => {
            debug!(
                id = %id,
                completed = progress.completed,
                total = progress.total,
                text = ?progress.text,
                "progress update"
            );
        }
        SinkEvent::Status { id, descriptor } => {
            if descriptor.kind.is_error() {
                warn!(id = %id, kind = %descriptor.kind, body = %descriptor.body, "item failed");
            } else {
                info!(id = %id, kind = %descriptor.kind, body = %descriptor.body, "item installed");
            }
        }
        SinkEvent::Summary { id, summary } => {
            debug!(id = %id, group = %summary.group, "summary posted");
        }
        SinkEvent::Cancelled { id } => {
            debug!(id = %id, "notification cancelled");
        }
    }
}
