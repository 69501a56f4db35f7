//! Package file references and batch install requests

use instq_errors::RequestError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to one installable package file.
///
/// The engine never interprets the reference beyond passing it to the
/// installer delegate and the name resolver; hosts are free to use file
/// paths, content URIs, or any other addressing scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageFile(String);

impl PackageFile {
    /// Create a new package file reference
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Borrow the underlying reference string
    #[must_use]
    pub fn as_uri(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PackageFile {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PackageFile {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered batch of package files submitted as one install job.
///
/// Validated at construction and immutable afterwards; the file order is the
/// processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallRequest {
    title: String,
    files: Vec<PackageFile>,
}

impl InstallRequest {
    /// Create a new install request with a display title and a non-empty
    /// ordered list of package files.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::EmptyBatch` if `files` is empty.
    pub fn new(title: impl Into<String>, files: Vec<PackageFile>) -> Result<Self, RequestError> {
        if files.is_empty() {
            return Err(RequestError::EmptyBatch);
        }
        Ok(Self {
            title: title.into(),
            files,
        })
    }

    /// Human-readable batch title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The package files in submission order
    #[must_use]
    pub fn files(&self) -> &[PackageFile] {
        &self.files
    }
}
