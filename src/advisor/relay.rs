//! Relay advisor client
//!
//! Talks to a small same-origin backend that holds the model credentials
//! and builds the prompt server-side. Wire contract:
//! request `{ imageBase64, lastMoves }`, response `{ suggestion }`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{AdvisorError, MoveAdvisor};
use crate::capture::Frame;

/// Client for a credential-attaching suggestion relay
#[derive(Debug)]
pub struct RelayAdvisor {
    url: String,
}

impl RelayAdvisor {
    /// Create a relay advisor posting to the given URL
    pub fn new(url: String) -> Self {
        Self { url }
    }

    fn request_body(frame: &Frame, prior_moves: &str) -> serde_json::Value {
        serde_json::json!({
            "imageBase64": STANDARD.encode(&frame.bytes),
            "lastMoves": prior_moves,
        })
    }
}

impl MoveAdvisor for RelayAdvisor {
    fn suggest(&self, frame: &Frame, prior_moves: &str) -> Result<String, AdvisorError> {
        let body = serde_json::to_string(&Self::request_body(frame, prior_moves))
            .map_err(|e| AdvisorError::Parse(e.to_string()))?;

        let response = ureq::post(&self.url)
            .set("content-type", "application/json")
            .send_string(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, response) => {
                    let body = response
                        .into_string()
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    AdvisorError::Api {
                        code,
                        message: relay_error_message(&body),
                    }
                }
                ureq::Error::Transport(t) => AdvisorError::Network(t.to_string()),
            })?;

        let text = response
            .into_string()
            .map_err(|e| AdvisorError::Network(e.to_string()))?;
        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| AdvisorError::Parse(e.to_string()))?;

        json.get("suggestion")
            .and_then(|s| s.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| AdvisorError::Parse("response had no 'suggestion' field".to_string()))
    }
}

/// Prefer the relay's structured `message` field over the raw error body
fn relay_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod relay_tests;
