//! Configuration loading
//!
//! Configuration is merged from defaults, an optional TOML file, and CLI
//! flags (highest precedence).

use crate::error::CliError;
use instq_install::JobConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub job: JobSection,

    #[serde(default)]
    pub installer: InstallerSection,
}

/// Install job configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSection {
    #[serde(default = "default_min_update_interval_ms")]
    pub min_update_interval_ms: u64,
}

impl Default for JobSection {
    fn default() -> Self {
        Self {
            min_update_interval_ms: default_min_update_interval_ms(),
        }
    }
}

/// Installer delegate configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InstallerSection {
    /// Command invoked once per package file
    pub command: Option<String>,
}

fn default_min_update_interval_ms() -> u64 {
    500
}

impl Config {
    /// Load configuration from the given file, or defaults when no file is
    /// specified.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if the file cannot be read or parsed.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| CliError::config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| CliError::config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Engine-level job configuration derived from this config
    #[must_use]
    pub fn job_config(&self) -> JobConfig {
        JobConfig::default()
            .with_min_update_interval(Duration::from_millis(self.job.min_update_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn missing_path_yields_defaults() {
        let config = Config::load_or_default(None).await.unwrap();
        assert_eq!(config.job.min_update_interval_ms, 500);
        assert!(config.installer.command.is_none());
    }

    #[tokio::test]
    async fn file_sections_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[job]\nmin_update_interval_ms = 250\n\n[installer]\ncommand = \"pkg-install\""
        )
        .unwrap();

        let config = Config::load_or_default(Some(file.path())).await.unwrap();
        assert_eq!(config.job.min_update_interval_ms, 250);
        assert_eq!(config.installer.command.as_deref(), Some("pkg-install"));
        assert_eq!(
            config.job_config().min_update_interval,
            Duration::from_millis(250)
        );
    }

    #[tokio::test]
    async fn unreadable_file_is_a_config_error() {
        let err = Config::load_or_default(Some(Path::new("/nonexistent/instq.toml")))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
