#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Notification surface for the instq batch-install engine
//!
//! The engine never renders anything itself - every user-visible status
//! update goes through the [`NotificationSink`] capability, which hosts
//! implement on top of whatever notification mechanism they have (system
//! notifications, a terminal, a test recorder).
//!
//! ## Architecture
//!
//! - **Fixed identity space**: one id for the ongoing progress notification,
//!   one for the group summary, and a monotonic per-job sequence for item
//!   notifications
//! - **Grouped posting**: the [`StatusComposer`] posts the group summary and
//!   the per-item notification as one atomic operation
//! - **Channel transport**: [`ChannelSink`] forwards timestamped, serializable
//!   [`SinkEvent`]s through an unbounded channel for out-of-process rendering

pub mod composer;
pub mod descriptor;
pub mod event;
pub mod id;

pub use composer::{compose, StatusComposer};
pub use descriptor::{
    BodyStyle, NotificationDescriptor, ProgressNotification, SummaryNotification,
    GROUP_INSTALL_STATUS,
};
pub use event::{channel, ChannelSink, SinkEvent, SinkMessage, SinkReceiver};
pub use id::{ItemIdSequence, NotificationId};

/// Capability API for posting user-facing notifications.
///
/// Implementations must tolerate repeated posts to the same id (an update)
/// and cancellation of ids that were never posted.
pub trait NotificationSink: Send + Sync {
    /// Post or update a determinate-progress notification under a fixed id
    fn post_progress(&self, id: NotificationId, progress: &ProgressNotification);

    /// Post a per-item status notification under an id within a named group
    fn post_status(&self, id: NotificationId, descriptor: &NotificationDescriptor);

    /// Post or update the group summary notification under a fixed id
    fn post_summary(&self, id: NotificationId, summary: &SummaryNotification);

    /// Remove a previously posted notification
    fn cancel(&self, id: NotificationId);
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<T> {
    fn post_progress(&self, id: NotificationId, progress: &ProgressNotification) {
        (**self).post_progress(id, progress);
    }
    fn post_status(&self, id: NotificationId, descriptor: &NotificationDescriptor) {
        (**self).post_status(id, descriptor);
    }
    fn post_summary(&self, id: NotificationId, summary: &SummaryNotification) {
        (**self).post_summary(id, summary);
    }
    fn cancel(&self, id: NotificationId) {
        (**self).cancel(id);
    }
}
