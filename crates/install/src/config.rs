//! Job configuration

use std::time::Duration;

/// Minimum interval between accepted progress updates.
///
/// Notification surfaces rate-limit updates to a single notification; posts
/// spaced closer than this are dropped by the reporter before they reach
/// the sink.
pub const DEFAULT_MIN_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

/// Install job configuration
#[derive(Clone, Debug)]
pub struct JobConfig {
    /// Minimum interval between accepted progress emissions
    pub min_update_interval: Duration,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            min_update_interval: DEFAULT_MIN_UPDATE_INTERVAL,
        }
    }
}

impl JobConfig {
    /// Set the minimum interval between accepted progress emissions
    #[must_use]
    pub fn with_min_update_interval(mut self, interval: Duration) -> Self {
        self.min_update_interval = interval;
        self
    }
}
