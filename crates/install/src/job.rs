//! Batch install job orchestration

use crate::classify::{classify, classify_delegate_failure};
use crate::config::JobConfig;
use crate::progress::ProgressReporter;
use crate::{Installer, NameResolver, Notice};
use instq_notify::{NotificationSink, StatusComposer};
use instq_types::{InstallRequest, JobId, JobReport, JobState};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tracing::debug;

/// Unit of work a host scheduler can dispatch on an execution context it
/// owns. The run blocks that context until the whole batch has been
/// attempted.
pub trait Task: Send {
    /// Run the task to completion
    fn run(&mut self) -> JobReport;
}

/// One batch install run from submission to completion.
///
/// The job owns its progress reporter, item id sequence, and lifecycle
/// state; nothing is shared across jobs, so concurrently dispatched jobs
/// cannot corrupt each other's rate limiting or id allocation.
pub struct InstallJob {
    id: JobId,
    request: InstallRequest,
    installer: Arc<dyn Installer>,
    resolver: Arc<dyn NameResolver>,
    notice: Arc<dyn Notice>,
    progress: ProgressReporter<Arc<dyn NotificationSink>>,
    composer: StatusComposer<Arc<dyn NotificationSink>>,
    state: watch::Sender<JobState>,
}

impl std::fmt::Debug for InstallJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallJob")
            .field("id", &self.id)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl InstallJob {
    /// Create a new job for a validated request
    #[must_use]
    pub fn new(
        request: InstallRequest,
        installer: Arc<dyn Installer>,
        resolver: Arc<dyn NameResolver>,
        notice: Arc<dyn Notice>,
        sink: Arc<dyn NotificationSink>,
        config: &JobConfig,
    ) -> Self {
        let progress = ProgressReporter::new(
            Arc::clone(&sink),
            request.title(),
            config.min_update_interval,
        );
        let composer = StatusComposer::new(sink, request.title());
        let (state, _) = watch::channel(JobState::Created);
        Self {
            id: JobId::new(),
            request,
            installer,
            resolver,
            notice,
            progress,
            composer,
            state,
        }
    }

    /// This job's identifier
    #[must_use]
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Subscribe to lifecycle transitions; the `Completed` value doubles as
    /// the job's completion signal.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<JobState> {
        self.state.subscribe()
    }

    /// Process the batch in submission order.
    ///
    /// Every item receives exactly one install attempt and exactly one
    /// status notification; a per-item failure never aborts the batch, and
    /// the returned report always represents job-level completion. There is
    /// no cancellation checkpoint; if one is ever added it belongs between
    /// loop iterations, never mid-install.
    pub fn run(&mut self) -> JobReport {
        self.state.send_replace(JobState::Running);
        debug!(job = %self.id, items = self.request.files().len(), "install job started");

        let files = self.request.files().to_vec();
        let total = files.len() as u64;

        self.notice.post(batch_notice(files.len()));

        // Initial determinate progress in ongoing state, before any item
        self.progress.emit(total, 0, Instant::now());

        let mut outcomes = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let name = self
                .resolver
                .display_name(file)
                .unwrap_or_else(|_| file.as_uri().to_string());
            let position = index as u64 + 1;
            self.progress
                .set_text(format!("Installing {name} ({position}/{total})"));

            // Blocks this job's execution context until the installer returns
            let outcome = match self.installer.install(file) {
                Ok(code) => classify(code, &name),
                Err(err) => {
                    debug!(job = %self.id, file = %file, error = %err, "installer delegate failed");
                    classify_delegate_failure(&name)
                }
            };
            self.composer.notify(&outcome);
            outcomes.push(outcome);

            self.progress.emit(total, position, Instant::now());
        }

        self.progress.finish();
        self.state.send_replace(JobState::Completed);
        debug!(job = %self.id, "install job completed");

        JobReport {
            job_id: self.id,
            title: self.request.title().to_string(),
            outcomes,
        }
    }
}

impl Task for InstallJob {
    fn run(&mut self) -> JobReport {
        Self::run(self)
    }
}

fn batch_notice(count: usize) -> String {
    if count == 1 {
        "Installing 1 package file".to_string()
    } else {
        format!("Installing {count} package files")
    }
}
