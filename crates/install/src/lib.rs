#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Batch package-install engine for instq
//!
//! An [`InstallJob`] runs an ordered batch of package files through an
//! external installer, classifies each result into the closed outcome
//! taxonomy, and reports progress and per-item outcomes to a
//! [`NotificationSink`](instq_notify::NotificationSink) under a hard
//! update-rate limit. Processing is strictly sequential within a job and a
//! per-item failure never aborts the batch.
//!
//! The installer, the display-name resolver, and the ephemeral user notice
//! are external collaborators injected as traits; the engine owns only the
//! orchestration, classification, and reporting logic.

pub mod classify;
pub mod config;
pub mod job;
pub mod progress;

pub use classify::{classify, classify_delegate_failure};
pub use config::JobConfig;
pub use job::{InstallJob, Task};
pub use progress::ProgressReporter;

use instq_errors::{Error, InstallerError};
use instq_types::{InstallCode, PackageFile};

/// External installer capability.
///
/// The call is synchronous and blocks the job's execution context until the
/// installer returns a result code. Implementations signal per-package
/// results through [`InstallCode`]; an `Err` means the installer itself
/// could not run, which the job classifies as an unknown outcome for that
/// item and continues with the rest of the batch.
pub trait Installer: Send + Sync {
    /// Install one package file, returning the raw result code
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError`] if the installer could not be invoked at
    /// all for this file.
    fn install(&self, file: &PackageFile) -> Result<InstallCode, InstallerError>;
}

/// Display-name resolution for package file references.
///
/// May fail; the job falls back to the raw reference string.
pub trait NameResolver: Send + Sync {
    /// Resolve a human-readable display name for the file
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when no display name can be resolved.
    fn display_name(&self, file: &PackageFile) -> Result<String, Error>;
}

/// Fire-and-forget short user message.
///
/// Best-effort and asynchronous: there is no ordering guarantee relative to
/// subsequent notifications and failures are not observable to the caller.
pub trait Notice: Send + Sync {
    /// Post the message
    fn post(&self, text: String);
}
