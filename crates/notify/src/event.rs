//! Channel-backed sink transport
//!
//! [`ChannelSink`] forwards every sink call as a timestamped, serializable
//! [`SinkMessage`] through an unbounded channel, so hosts can render
//! notifications on whatever surface they own without blocking the job.

use crate::descriptor::{NotificationDescriptor, ProgressNotification, SummaryNotification};
use crate::id::NotificationId;
use crate::NotificationSink;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::Level;

/// One notification-sink call, reified for transport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SinkEvent {
    /// Determinate progress posted or updated
    Progress {
        id: NotificationId,
        progress: ProgressNotification,
    },

    /// Per-item status posted
    Status {
        id: NotificationId,
        descriptor: NotificationDescriptor,
    },

    /// Group summary posted or updated
    Summary {
        id: NotificationId,
        summary: SummaryNotification,
    },

    /// Notification removed
    Cancelled { id: NotificationId },
}

impl SinkEvent {
    /// Severity used when routing the event into structured logging
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::Status { descriptor, .. } => {
                if descriptor.kind.is_error() {
                    Level::WARN
                } else {
                    Level::INFO
                }
            }
            Self::Progress { .. } | Self::Summary { .. } | Self::Cancelled { .. } => Level::DEBUG,
        }
    }
}

/// Envelope pairing a sink event with its emission timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkMessage {
    /// Timestamp captured when the sink call was made
    pub posted_at: DateTime<Utc>,
    /// The reified sink call
    #[serde(flatten)]
    pub event: SinkEvent,
}

impl SinkMessage {
    fn now(event: SinkEvent) -> Self {
        Self {
            posted_at: Utc::now(),
            event,
        }
    }
}

/// Type alias for the receiving half of a sink channel
pub type SinkReceiver = UnboundedReceiver<SinkMessage>;

/// Create a new channel-backed sink together with its receiver
#[must_use]
pub fn channel() -> (ChannelSink, SinkReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelSink { tx }, rx)
}

/// [`NotificationSink`] implementation forwarding events into a channel
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<SinkMessage>,
}

impl NotificationSink for ChannelSink {
    fn post_progress(&self, id: NotificationId, progress: &ProgressNotification) {
        // Ignore send errors - if the receiver is dropped, we just continue
        let _ = self.tx.send(SinkMessage::now(SinkEvent::Progress {
            id,
            progress: progress.clone(),
        }));
    }

    fn post_status(&self, id: NotificationId, descriptor: &NotificationDescriptor) {
        let _ = self.tx.send(SinkMessage::now(SinkEvent::Status {
            id,
            descriptor: descriptor.clone(),
        }));
    }

    fn post_summary(&self, id: NotificationId, summary: &SummaryNotification) {
        let _ = self.tx.send(SinkMessage::now(SinkEvent::Summary {
            id,
            summary: summary.clone(),
        }));
    }

    fn cancel(&self, id: NotificationId) {
        let _ = self.tx.send(SinkMessage::now(SinkEvent::Cancelled { id }));
    }
}
