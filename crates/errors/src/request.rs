//! Install request validation error types

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestError {
    #[error("no package files specified")]
    EmptyBatch,

    #[error("invalid package file reference: {reference}")]
    InvalidFileReference { reference: String },
}
