//! Notification identity space
//!
//! The integer key space is partitioned into three fixed regions: the
//! ongoing progress notification, the group summary, and the item sequence
//! starting at [`NotificationId::ITEM_BASE`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer key distinguishing one user-facing status entry from another
/// within the notification sink.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NotificationId(u32);

impl NotificationId {
    /// Fixed id of the ongoing determinate-progress notification
    pub const PROGRESS: Self = Self(0x10);

    /// Fixed id of the group summary notification
    pub const SUMMARY: Self = Self(0x11);

    /// First id of the per-item status sequence
    pub const ITEM_BASE: Self = Self(0x100);

    /// The raw integer key
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Allocator for per-item notification ids.
///
/// Owned by one job; ids are strictly increasing and never reused within
/// that scope.
#[derive(Debug)]
pub struct ItemIdSequence {
    next: u32,
}

impl ItemIdSequence {
    /// Create a sequence starting at [`NotificationId::ITEM_BASE`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: NotificationId::ITEM_BASE.as_u32(),
        }
    }

    /// Allocate the next item id
    pub fn next_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next);
        self.next += 1;
        id
    }
}

impl Default for ItemIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
