//! Notification payload descriptors

use instq_types::OutcomeKind;
use serde::{Deserialize, Serialize};

/// Group key shared by every per-item status notification and the summary.
///
/// Grouped items only render while a notification with this key is posted
/// as the group summary.
pub const GROUP_INSTALL_STATUS: &str = "instq.install.status";

/// Body rendering variant for a status notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyStyle {
    /// Single-line body
    Plain,
    /// Expandable long-text body for messages that may exceed one line
    BigText,
}

/// Title/body pair for one per-item status notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDescriptor {
    /// Title line selected by the outcome kind
    pub title: String,
    /// Body text carrying the outcome message
    pub body: String,
    /// Body rendering variant
    pub style: BodyStyle,
    /// Group key tying the item to its summary
    pub group: String,
    /// The classified outcome this descriptor presents
    pub kind: OutcomeKind,
}

/// Determinate-progress notification payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressNotification {
    /// Batch display title
    pub title: String,
    /// Current per-item text, e.g. "Installing foo (2/5)"
    pub text: Option<String>,
    /// Total work units in the batch
    pub total: u64,
    /// Completed work units
    pub completed: u64,
    /// Whether the notification is marked ongoing (non-dismissable)
    pub ongoing: bool,
}

/// Group summary notification payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryNotification {
    /// Batch display title
    pub title: String,
    /// Group key shared with the per-item notifications
    pub group: String,
}

impl SummaryNotification {
    /// Create a summary for the install status group
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            group: GROUP_INSTALL_STATUS.to_string(),
        }
    }
}
