#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the instq batch-install engine
//!
//! This crate provides the fundamental types used throughout the system:
//! package file references, install requests, installer result codes, the
//! closed outcome taxonomy, and job-level identifiers and reports.

pub mod job;
pub mod outcome;
pub mod package;

// Re-export commonly used types
pub use job::{JobId, JobReport, JobState};
pub use outcome::{InstallCode, InstallOutcome, OutcomeKind};
pub use package::{InstallRequest, PackageFile};
pub use uuid::Uuid;
