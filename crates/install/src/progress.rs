//! Rate-limited progress reporting
//!
//! The reporter coalesces by dropping: an update arriving within the
//! configured interval of the last accepted one simply never reaches the
//! sink. Callers must not assume every emission is observed downstream.

use instq_notify::{NotificationId, NotificationSink, ProgressNotification};
use std::time::{Duration, Instant};

/// Rate-limited sink for the ongoing determinate-progress notification.
///
/// One reporter is owned by one job; its timestamp state is never shared
/// across jobs, so concurrent jobs cannot interfere with each other's rate
/// limiting.
#[derive(Debug)]
pub struct ProgressReporter<S> {
    sink: S,
    title: String,
    text: Option<String>,
    min_interval: Duration,
    last_emit: Option<Instant>,
}

impl<S: NotificationSink> ProgressReporter<S> {
    /// Create a reporter posting under the given batch title
    pub fn new(sink: S, title: impl Into<String>, min_interval: Duration) -> Self {
        Self {
            sink,
            title: title.into(),
            text: None,
            min_interval,
            last_emit: None,
        }
    }

    /// Update the ongoing notification's text without posting.
    ///
    /// The text becomes visible with the next accepted emission.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Post a progress update, unless it lands within the rate limit.
    ///
    /// A dropped update is not queued or retried - the sink never learns of
    /// it. The first emission in the reporter's lifetime is always
    /// delivered. Returns whether the update reached the sink.
    pub fn emit(&mut self, total: u64, completed: u64, now: Instant) -> bool {
        if let Some(last) = self.last_emit {
            if now.duration_since(last) < self.min_interval {
                return false;
            }
        }
        self.last_emit = Some(now);
        self.sink.post_progress(
            NotificationId::PROGRESS,
            &ProgressNotification {
                title: self.title.clone(),
                text: self.text.clone(),
                total,
                completed: completed.min(total),
                ongoing: true,
            },
        );
        true
    }

    /// Remove the ongoing notification. Never rate limited.
    pub fn finish(&mut self) {
        self.sink.cancel(NotificationId::PROGRESS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use instq_notify::{
        NotificationDescriptor, SummaryNotification,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CountingSink {
        progress: Mutex<Vec<(u64, u64, Option<String>)>>,
        cancelled: Mutex<Vec<NotificationId>>,
    }

    impl NotificationSink for CountingSink {
        fn post_progress(&self, _id: NotificationId, p: &ProgressNotification) {
            self.progress
                .lock()
                .unwrap()
                .push((p.total, p.completed, p.text.clone()));
        }
        fn post_status(&self, _id: NotificationId, _d: &NotificationDescriptor) {}
        fn post_summary(&self, _id: NotificationId, _s: &SummaryNotification) {}
        fn cancel(&self, id: NotificationId) {
            self.cancelled.lock().unwrap().push(id);
        }
    }

    fn reporter(sink: &Arc<CountingSink>) -> ProgressReporter<Arc<CountingSink>> {
        ProgressReporter::new(Arc::clone(sink), "Batch", Duration::from_millis(500))
    }

    #[test]
    fn first_emission_is_always_delivered() {
        let sink = Arc::new(CountingSink::default());
        let mut rep = reporter(&sink);
        assert!(rep.emit(10, 0, Instant::now()));
        assert_eq!(sink.progress.lock().unwrap().len(), 1);
    }

    #[test]
    fn updates_inside_the_interval_are_dropped() {
        let sink = Arc::new(CountingSink::default());
        let mut rep = reporter(&sink);
        let t0 = Instant::now();
        assert!(rep.emit(10, 0, t0));
        assert!(!rep.emit(10, 1, t0 + Duration::from_millis(100)));
        assert!(!rep.emit(10, 2, t0 + Duration::from_millis(499)));
        assert_eq!(sink.progress.lock().unwrap().len(), 1);
    }

    #[test]
    fn updates_past_the_interval_are_delivered() {
        let sink = Arc::new(CountingSink::default());
        let mut rep = reporter(&sink);
        let t0 = Instant::now();
        assert!(rep.emit(10, 0, t0));
        assert!(rep.emit(10, 5, t0 + Duration::from_millis(500)));
        assert_eq!(sink.progress.lock().unwrap().len(), 2);
    }

    #[test]
    fn dropped_updates_are_not_queued() {
        let sink = Arc::new(CountingSink::default());
        let mut rep = reporter(&sink);
        let t0 = Instant::now();
        rep.emit(10, 0, t0);
        rep.emit(10, 3, t0 + Duration::from_millis(100));
        rep.emit(10, 7, t0 + Duration::from_millis(600));

        let seen = sink.progress.lock().unwrap();
        let completed: Vec<u64> = seen.iter().map(|(_, c, _)| *c).collect();
        // The (10, 3) update is gone, not delivered late
        assert_eq!(completed, vec![0, 7]);
    }

    #[test]
    fn text_rides_with_the_next_accepted_emission() {
        let sink = Arc::new(CountingSink::default());
        let mut rep = reporter(&sink);
        let t0 = Instant::now();
        rep.emit(10, 0, t0);
        rep.set_text("Installing foo (1/10)");
        rep.emit(10, 1, t0 + Duration::from_millis(100));
        assert_eq!(sink.progress.lock().unwrap().len(), 1);

        rep.emit(10, 2, t0 + Duration::from_secs(1));
        let seen = sink.progress.lock().unwrap();
        assert_eq!(
            seen.last().unwrap().2.as_deref(),
            Some("Installing foo (1/10)")
        );
    }

    #[test]
    fn finish_cancels_unconditionally() {
        let sink = Arc::new(CountingSink::default());
        let mut rep = reporter(&sink);
        let t0 = Instant::now();
        rep.emit(10, 0, t0);
        // Immediately after an accepted emission, well inside the interval
        rep.finish();
        assert_eq!(
            sink.cancelled.lock().unwrap().as_slice(),
            &[NotificationId::PROGRESS]
        );
    }

    #[test]
    fn completed_never_exceeds_total() {
        let sink = Arc::new(CountingSink::default());
        let mut rep = reporter(&sink);
        rep.emit(5, 9, Instant::now());
        let seen = sink.progress.lock().unwrap();
        assert_eq!(seen[0].0, 5);
        assert_eq!(seen[0].1, 5);
    }
}
