//! Host-side collaborator implementations
//!
//! The engine treats the installer, name resolution, and the ephemeral
//! notice as opaque capabilities; these are the CLI's concrete versions.

use console::{style, Term};
use instq_errors::{Error, InstallerError};
use instq_install::{Installer, NameResolver, Notice};
use instq_types::{InstallCode, PackageFile};
use std::path::Path;
use std::process::Command;

/// Installer delegate that runs an external command once per package file.
///
/// The command receives the file reference as its single argument and
/// reports the install result through its exit status.
pub struct CommandInstaller {
    command: String,
}

impl CommandInstaller {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Installer for CommandInstaller {
    fn install(&self, file: &PackageFile) -> Result<InstallCode, InstallerError> {
        let status = Command::new(&self.command)
            .arg(file.as_uri())
            .status()
            .map_err(|e| InstallerError::unavailable(format!("{}: {e}", self.command)))?;
        code_from_exit(status.code())
    }
}

/// Map an exit status to an install code. A missing code means the process
/// was terminated by a signal and never reported a result.
fn code_from_exit(code: Option<i32>) -> Result<InstallCode, InstallerError> {
    code.map(InstallCode::from_raw)
        .ok_or_else(|| InstallerError::failed("installer terminated by signal"))
}

/// Resolves display names from the file component of the reference
pub struct FileNameResolver;

impl NameResolver for FileNameResolver {
    fn display_name(&self, file: &PackageFile) -> Result<String, Error> {
        Path::new(file.as_uri())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                InstallerError::NameResolution {
                    reference: file.as_uri().to_string(),
                    message: "reference has no file name component".to_string(),
                }
                .into()
            })
    }
}

/// Ephemeral notice printed to the terminal, best-effort
pub struct TerminalNotice {
    term: Term,
}

impl TerminalNotice {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl Notice for TerminalNotice {
    fn post(&self, text: String) {
        let _ = self.term.write_line(&format!("{}", style(text).dim()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use instq_install::classify;
    use instq_types::OutcomeKind;

    #[test]
    fn exit_codes_map_to_install_codes() {
        assert_eq!(code_from_exit(Some(0)).unwrap(), InstallCode::SUCCESS);
        assert_eq!(
            code_from_exit(Some(5)).unwrap(),
            InstallCode::ERROR_ENCRYPTED
        );
        // Out-of-range exit codes flow through classification as unknown
        let outcome = classify(code_from_exit(Some(77)).unwrap(), "demo.pkg");
        assert_eq!(outcome.kind, OutcomeKind::Unknown);
    }

    #[test]
    fn signal_termination_is_an_installer_error() {
        assert!(code_from_exit(None).is_err());
    }

    #[test]
    fn resolver_extracts_file_names() {
        let name = FileNameResolver
            .display_name(&PackageFile::from("/downloads/game.pkg"))
            .unwrap();
        assert_eq!(name, "game.pkg");
    }
}
