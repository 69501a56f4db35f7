//! Integration tests for core types

#[cfg(test)]
mod tests {
    use instq_errors::RequestError;
    use instq_types::*;

    #[test]
    fn empty_batch_is_rejected() {
        let err = InstallRequest::new("Nothing", Vec::new()).unwrap_err();
        assert!(matches!(err, RequestError::EmptyBatch));
    }

    #[test]
    fn request_preserves_submission_order() {
        let request = InstallRequest::new(
            "Weekend backlog",
            vec![
                PackageFile::from("pkg://one"),
                PackageFile::from("pkg://two"),
                PackageFile::from("pkg://three"),
            ],
        )
        .unwrap();
        let uris: Vec<&str> = request.files().iter().map(PackageFile::as_uri).collect();
        assert_eq!(uris, vec!["pkg://one", "pkg://two", "pkg://three"]);
        assert_eq!(request.title(), "Weekend backlog");
    }

    #[test]
    fn outcome_kind_serialization() {
        let json = serde_json::to_string(&OutcomeKind::FailedToOpenFile).unwrap();
        assert_eq!(json, r#""failed_to_open_file""#);
    }

    #[test]
    fn install_code_round_trips_raw_values() {
        assert_eq!(InstallCode::from_raw(5), InstallCode::ERROR_ENCRYPTED);
        assert_eq!(InstallCode::from_raw(1234).raw(), 1234);
    }

    #[test]
    fn report_counts_split_by_outcome() {
        let report = JobReport {
            job_id: JobId::new(),
            title: "Batch".to_string(),
            outcomes: vec![
                InstallOutcome::new("a", OutcomeKind::Success, "ok"),
                InstallOutcome::new("b", OutcomeKind::Encrypted, "nope"),
                InstallOutcome::new("c", OutcomeKind::Unknown, "nope"),
            ],
        };
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 2);
    }

    #[test]
    fn job_ids_are_unique() {
        assert_ne!(JobId::new(), JobId::new());
    }
}
