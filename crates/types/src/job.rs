//! Job identifiers, lifecycle states, and completion reports

use crate::InstallOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one install job run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(Uuid);

impl JobId {
    /// Create a new job ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of an install job.
///
/// Transitions are strictly `Created -> Running -> Completed`; there is no
/// cancelled or failed terminal state, since per-item failures never abort
/// the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Created,
    Running,
    Completed,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Completed => "completed",
        };
        write!(f, "{label}")
    }
}

/// Completion report for one install job.
///
/// The report's existence is the job-level result: a job completes once
/// every item has been attempted, independent of how many items failed.
/// Aggregate pass/fail is a property of the accumulated outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    /// Identifier of the job that produced this report
    pub job_id: JobId,
    /// Batch display title from the originating request
    pub title: String,
    /// Per-item outcomes in submission order
    pub outcomes: Vec<InstallOutcome>,
}

impl JobReport {
    /// Number of items that installed successfully
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.kind.is_success())
            .count()
    }

    /// Number of items that failed to install
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.kind.is_error()).count()
    }
}
