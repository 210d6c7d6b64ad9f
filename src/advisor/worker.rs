//! Advisor worker thread
//!
//! Handles advisor calls in a background thread so the session never blocks
//! on network latency. Receives snapshot requests via channel, makes the
//! blocking HTTP call, and sends the tagged result back to the session.
//! Requests carry an id; the session discards responses whose id no longer
//! matches, which is how stale results from a stopped session are ignored.

use std::sync::mpsc::{Receiver, Sender};

use super::{AdvisorError, MoveAdvisor};
use crate::capture::Frame;

/// Request messages sent to the advisor worker thread
#[derive(Debug)]
pub enum AdvisorRequest {
    /// Ask for suggestions for one board snapshot
    Suggest {
        frame: Frame,
        /// The last shown suggestion text; empty on the initial analysis
        prior_moves: String,
        /// Unique id for this request, echoed back in the response
        request_id: u64,
    },
}

/// Response messages received from the advisor worker thread
#[derive(Debug)]
pub enum AdvisorResponse {
    /// The advisor's raw suggestion text
    Suggestion { text: String, request_id: u64 },
    /// The call failed
    Failed {
        error: AdvisorError,
        request_id: u64,
    },
}

/// Spawn the advisor worker thread
///
/// `advisor` may be an error (e.g. missing API key); the worker still runs
/// and reports the problem on the first request, so the UI can come up and
/// show a useful message instead of refusing to start.
pub fn spawn_worker(
    advisor: Result<Box<dyn MoveAdvisor>, AdvisorError>,
    request_rx: Receiver<AdvisorRequest>,
    response_tx: Sender<AdvisorResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(advisor, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    advisor_result: Result<Box<dyn MoveAdvisor>, AdvisorError>,
    request_rx: Receiver<AdvisorRequest>,
    response_tx: Sender<AdvisorResponse>,
) {
    let advisor = match advisor_result {
        Ok(advisor) => Some(advisor),
        Err(e) => {
            log::debug!("advisor not configured: {e}");
            None
        }
    };

    while let Ok(request) = request_rx.recv() {
        let AdvisorRequest::Suggest {
            frame,
            prior_moves,
            request_id,
        } = request;

        let response = match &advisor {
            Some(advisor) => match advisor.suggest(&frame, &prior_moves) {
                Ok(text) => AdvisorResponse::Suggestion { text, request_id },
                Err(error) => {
                    log::debug!("advisor request {request_id} failed: {error}");
                    AdvisorResponse::Failed { error, request_id }
                }
            },
            None => AdvisorResponse::Failed {
                error: AdvisorError::NotConfigured(
                    "add an [advisor] section with an api_key to the config".to_string(),
                ),
                request_id,
            },
        };

        if response_tx.send(response).is_err() {
            // Session side disconnected, nothing left to serve
            return;
        }
    }

    log::debug!("advisor worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
