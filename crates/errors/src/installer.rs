//! Installer delegate error types

use thiserror::Error;

/// Failures raised by the external installer capability itself, as opposed
/// to install result codes it returns for individual packages.
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstallerError {
    #[error("installer invocation failed: {message}")]
    Failed { message: String },

    #[error("installer unavailable: {message}")]
    Unavailable { message: String },

    #[error("name resolution failed for {reference}: {message}")]
    NameResolution { reference: String, message: String },
}

impl InstallerError {
    /// Create a `Failed` error with a message
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed {
            message: msg.into(),
        }
    }

    /// Create an `Unavailable` error with a message
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable {
            message: msg.into(),
        }
    }
}
