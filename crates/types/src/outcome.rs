//! Installer result codes and the closed outcome taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw result code returned by the installer delegate.
///
/// The installer sits behind a foreign boundary, so the code arrives as a
/// plain integer. The named constants cover the closed set the installer is
/// documented to return; any other value is still legal input to
/// classification and resolves to [`OutcomeKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstallCode(i32);

impl InstallCode {
    pub const SUCCESS: Self = Self(0);
    pub const ERROR_FAILED_TO_OPEN_FILE: Self = Self(1);
    pub const ERROR_FILE_NOT_FOUND: Self = Self(2);
    pub const ERROR_ABORTED: Self = Self(3);
    pub const ERROR_INVALID: Self = Self(4);
    pub const ERROR_ENCRYPTED: Self = Self(5);

    /// Wrap a raw integer code as received from the installer
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        Self(code)
    }

    /// The raw integer value
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for InstallCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed taxonomy classifying one item's install result.
///
/// Every installer code, including out-of-range ones, resolves to exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    FailedToOpenFile,
    FileNotFound,
    Aborted,
    Invalid,
    Encrypted,
    Unknown,
}

impl OutcomeKind {
    /// Whether this outcome represents a successful install
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether this outcome represents a failed install
    #[must_use]
    pub fn is_error(self) -> bool {
        !self.is_success()
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::FailedToOpenFile => "failed to open file",
            Self::FileNotFound => "file not found",
            Self::Aborted => "aborted",
            Self::Invalid => "invalid",
            Self::Encrypted => "encrypted",
            Self::Unknown => "unknown error",
        };
        write!(f, "{label}")
    }
}

/// Classified result for one item in a batch.
///
/// Produced exactly once per item and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallOutcome {
    /// Display name resolved for the item
    pub display_name: String,
    /// Classified outcome kind
    pub kind: OutcomeKind,
    /// Human-readable message describing the result
    pub message: String,
}

impl InstallOutcome {
    /// Create a new install outcome
    pub fn new(
        display_name: impl Into<String>,
        kind: OutcomeKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            kind,
            message: message.into(),
        }
    }
}
