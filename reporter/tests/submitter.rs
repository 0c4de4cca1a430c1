mod helpers;

use axum::http::StatusCode;
use helpers::{MockBackend, unreachable_endpoint};
use marker::types::{RunStatus, ScoringRecord};
use reporter::error::SubmissionError;
use reporter::submitter::ResultSubmitter;
use std::time::Duration;

fn record() -> ScoringRecord {
    ScoringRecord {
        passed: 1,
        failed: 0,
        passed_tests: vec!["Loads homepage - marks 2".into()],
        failed_tests_with_reasons: vec![],
        marks: 2.0,
        errors: vec![],
        status: RunStatus::Passed,
        student: None,
        github_link: None,
        cy_project: None,
    }
    .with_identity("STU-001", None, None)
}

#[tokio::test]
async fn test_submit_success() {
    let backend = MockBackend::start(StatusCode::OK).await;
    let submitter = ResultSubmitter::new(backend.endpoint(), None).unwrap();

    submitter.submit(&record(), "secret").await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer secret"));
    assert_eq!(requests[0].body["status"], "PASSED");
}

#[tokio::test]
async fn test_submit_rejected_reports_status_and_reason() {
    let backend = MockBackend::start(StatusCode::INTERNAL_SERVER_ERROR).await;
    let submitter = ResultSubmitter::new(backend.endpoint(), None).unwrap();

    let err = submitter.submit(&record(), "secret").await.unwrap_err();
    match &err {
        SubmissionError::Rejected { status, reason } => {
            assert_eq!(*status, 500);
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("Expected Rejected error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Failed to post result: 500 Internal Server Error"
    );
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn test_submit_unauthorized() {
    let backend = MockBackend::start(StatusCode::UNAUTHORIZED).await;
    let submitter = ResultSubmitter::new(backend.endpoint(), None).unwrap();

    let err = submitter.submit(&record(), "wrong").await.unwrap_err();
    assert!(matches!(err, SubmissionError::Rejected { status: 401, .. }));
}

#[tokio::test]
async fn test_submit_connection_refused_is_transport_error() {
    let submitter = ResultSubmitter::new(unreachable_endpoint().await, None).unwrap();

    let err = submitter.submit(&record(), "secret").await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_submit_respects_timeout() {
    let backend =
        MockBackend::start_with_delay(StatusCode::OK, Some(Duration::from_secs(3))).await;
    let submitter =
        ResultSubmitter::new(backend.endpoint(), Some(Duration::from_millis(200))).unwrap();

    let err = submitter.submit(&record(), "secret").await.unwrap_err();
    match err {
        SubmissionError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("Expected Transport error, got {other:?}"),
    }
}
