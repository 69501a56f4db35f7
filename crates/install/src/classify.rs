//! Installer result classification
//!
//! Total mapping from raw installer codes to the closed outcome taxonomy.
//! Classification is side-effect free and never fails: unrecognized codes
//! resolve to [`OutcomeKind::Unknown`] instead of propagating as job-level
//! errors.

use instq_types::{InstallCode, InstallOutcome, OutcomeKind};

/// Classify a raw installer result code for the named item.
///
/// `FailedToOpenFile` and `FileNotFound` keep their distinct kinds but share
/// the generic unknown-error message with out-of-range codes, matching the
/// installer's established user-facing behavior.
#[must_use]
pub fn classify(code: InstallCode, display_name: &str) -> InstallOutcome {
    let (kind, message) = match code {
        InstallCode::SUCCESS => (
            OutcomeKind::Success,
            format!("{display_name} was installed successfully"),
        ),
        InstallCode::ERROR_ABORTED => (
            OutcomeKind::Aborted,
            format!("The installation of {display_name} was aborted before it could finish"),
        ),
        InstallCode::ERROR_INVALID => (
            OutcomeKind::Invalid,
            format!(
                "{display_name} is not a valid package. The file may be corrupt, \
                 incomplete, or not a package at all"
            ),
        ),
        InstallCode::ERROR_ENCRYPTED => (
            OutcomeKind::Encrypted,
            format!(
                "{display_name} is encrypted and cannot be installed. Decrypt the \
                 package before retrying the install"
            ),
        ),
        InstallCode::ERROR_FAILED_TO_OPEN_FILE => {
            (OutcomeKind::FailedToOpenFile, unknown_message(display_name))
        }
        InstallCode::ERROR_FILE_NOT_FOUND => {
            (OutcomeKind::FileNotFound, unknown_message(display_name))
        }
        _ => (OutcomeKind::Unknown, unknown_message(display_name)),
    };
    InstallOutcome::new(display_name, kind, message)
}

/// Outcome for an item whose installer invocation failed outright, rather
/// than returning a result code.
#[must_use]
pub fn classify_delegate_failure(display_name: &str) -> InstallOutcome {
    InstallOutcome::new(
        display_name,
        OutcomeKind::Unknown,
        unknown_message(display_name),
    )
}

fn unknown_message(display_name: &str) -> String {
    format!("An unknown error occurred while installing {display_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_defined_code_classifies() {
        let cases = [
            (InstallCode::SUCCESS, OutcomeKind::Success),
            (
                InstallCode::ERROR_FAILED_TO_OPEN_FILE,
                OutcomeKind::FailedToOpenFile,
            ),
            (InstallCode::ERROR_FILE_NOT_FOUND, OutcomeKind::FileNotFound),
            (InstallCode::ERROR_ABORTED, OutcomeKind::Aborted),
            (InstallCode::ERROR_INVALID, OutcomeKind::Invalid),
            (InstallCode::ERROR_ENCRYPTED, OutcomeKind::Encrypted),
        ];
        for (code, expected) in cases {
            let outcome = classify(code, "demo.pkg");
            assert_eq!(outcome.kind, expected, "code {code}");
            assert!(!outcome.message.is_empty());
            assert_eq!(outcome.display_name, "demo.pkg");
        }
    }

    #[test]
    fn out_of_range_codes_resolve_to_unknown() {
        for raw in [-1, 6, 42, i32::MAX, i32::MIN] {
            let outcome = classify(InstallCode::from_raw(raw), "demo.pkg");
            assert_eq!(outcome.kind, OutcomeKind::Unknown);
            assert!(!outcome.message.is_empty());
        }
    }

    #[test]
    fn open_and_not_found_share_the_generic_message() {
        let open = classify(InstallCode::ERROR_FAILED_TO_OPEN_FILE, "demo.pkg");
        let missing = classify(InstallCode::ERROR_FILE_NOT_FOUND, "demo.pkg");
        let unknown = classify(InstallCode::from_raw(99), "demo.pkg");
        assert_eq!(open.message, unknown.message);
        assert_eq!(missing.message, unknown.message);
        assert_ne!(open.kind, missing.kind);
    }

    #[test]
    fn messages_embed_the_display_name() {
        for code in [
            InstallCode::SUCCESS,
            InstallCode::ERROR_ABORTED,
            InstallCode::ERROR_INVALID,
            InstallCode::ERROR_ENCRYPTED,
            InstallCode::from_raw(7),
        ] {
            let outcome = classify(code, "zelda.pkg");
            assert!(outcome.message.contains("zelda.pkg"));
        }
    }

    #[test]
    fn delegate_failure_is_an_unknown_outcome() {
        let outcome = classify_delegate_failure("demo.pkg");
        assert_eq!(outcome.kind, OutcomeKind::Unknown);
        assert!(outcome.message.contains("demo.pkg"));
    }
}
