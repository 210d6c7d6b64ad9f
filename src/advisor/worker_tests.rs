//! Tests for the advisor worker thread

use std::sync::mpsc;

use super::*;

/// Advisor double that returns a canned result
struct CannedAdvisor {
    result: fn(&Frame, &str) -> Result<String, AdvisorError>,
}

impl MoveAdvisor for CannedAdvisor {
    fn suggest(&self, frame: &Frame, prior_moves: &str) -> Result<String, AdvisorError> {
        (self.result)(frame, prior_moves)
    }
}

fn test_frame() -> Frame {
    Frame {
        bytes: vec![0xFF, 0xD8],
        mime_type: "image/jpeg".to_string(),
    }
}

#[test]
fn worker_forwards_suggestions_with_the_request_id() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    let advisor = CannedAdvisor {
        result: |_, prior| Ok(format!("1. Move 7♠ to foundation [prior={prior}]")),
    };
    std::thread::spawn(move || {
        worker_loop(Ok(Box::new(advisor)), request_rx, response_tx);
    });

    request_tx
        .send(AdvisorRequest::Suggest {
            frame: test_frame(),
            prior_moves: "old".to_string(),
            request_id: 7,
        })
        .unwrap();

    match response_rx.recv().unwrap() {
        AdvisorResponse::Suggestion { text, request_id } => {
            assert_eq!(request_id, 7);
            assert_eq!(text, "1. Move 7♠ to foundation [prior=old]");
        }
        other => panic!("expected a suggestion, got {other:?}"),
    }
}

#[test]
fn worker_reports_failures_without_dying() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    let advisor = CannedAdvisor {
        result: |_, _| Err(AdvisorError::Network("connection refused".to_string())),
    };
    std::thread::spawn(move || {
        worker_loop(Ok(Box::new(advisor)), request_rx, response_tx);
    });

    for id in [1u64, 2] {
        request_tx
            .send(AdvisorRequest::Suggest {
                frame: test_frame(),
                prior_moves: String::new(),
                request_id: id,
            })
            .unwrap();

        match response_rx.recv().unwrap() {
            AdvisorResponse::Failed { error, request_id } => {
                assert_eq!(request_id, id);
                assert!(matches!(error, AdvisorError::Network(_)));
            }
            other => panic!("expected a failure, got {other:?}"),
        }
    }
}

#[test]
fn worker_without_an_advisor_reports_not_configured() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    std::thread::spawn(move || {
        worker_loop(
            Err(AdvisorError::NotConfigured("test".to_string())),
            request_rx,
            response_tx,
        );
    });

    request_tx
        .send(AdvisorRequest::Suggest {
            frame: test_frame(),
            prior_moves: String::new(),
            request_id: 1,
        })
        .unwrap();

    match response_rx.recv().unwrap() {
        AdvisorResponse::Failed { error, request_id } => {
            assert_eq!(request_id, 1);
            assert!(error.to_string().contains("not configured"));
        }
        other => panic!("expected a failure, got {other:?}"),
    }
}

#[test]
fn worker_shuts_down_when_channel_closed() {
    let (request_tx, request_rx) = mpsc::channel::<AdvisorRequest>();
    let (response_tx, _response_rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        worker_loop(
            Err(AdvisorError::NotConfigured("test".to_string())),
            request_rx,
            response_tx,
        );
    });

    drop(request_tx);

    handle.join().expect("worker thread should exit cleanly");
}
