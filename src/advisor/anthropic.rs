//! Anthropic Messages API client
//!
//! Sends one vision request per board snapshot: the frame as a base64 image
//! block plus the fixed Klondike prompt. Non-streaming; the whole suggestion
//! list comes back in a single response.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::prompt::solitaire_prompt;
use super::{AdvisorError, MoveAdvisor};
use crate::capture::Frame;

/// Anthropic API endpoint
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version header
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Model used when the config does not name one
pub(super) const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

/// Anthropic Messages API client
#[derive(Debug)]
pub struct AnthropicAdvisor {
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicAdvisor {
    /// Create a new Anthropic advisor
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Self {
        Self {
            api_key,
            model,
            max_tokens,
        }
    }

    /// Build the Messages API request body for one snapshot
    fn request_body(&self, frame: &Frame, prior_moves: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image",
                            "source": {
                                "type": "base64",
                                "media_type": frame.mime_type,
                                "data": STANDARD.encode(&frame.bytes),
                            },
                        },
                        {
                            "type": "text",
                            "text": solitaire_prompt(prior_moves),
                        },
                    ],
                }
            ],
        })
    }
}

impl MoveAdvisor for AnthropicAdvisor {
    fn suggest(&self, frame: &Frame, prior_moves: &str) -> Result<String, AdvisorError> {
        let body = serde_json::to_string(&self.request_body(frame, prior_moves))
            .map_err(|e| AdvisorError::Parse(e.to_string()))?;

        let response = ureq::post(ANTHROPIC_API_URL)
            .set("x-api-key", &self.api_key)
            .set("anthropic-version", ANTHROPIC_VERSION)
            .set("content-type", "application/json")
            .send_string(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, response) => {
                    let message = response
                        .into_string()
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    AdvisorError::Api { code, message }
                }
                ureq::Error::Transport(t) => AdvisorError::Network(t.to_string()),
            })?;

        let text = response
            .into_string()
            .map_err(|e| AdvisorError::Network(e.to_string()))?;
        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| AdvisorError::Parse(e.to_string()))?;

        extract_text(&json)
            .ok_or_else(|| AdvisorError::Parse("response contained no text block".to_string()))
    }
}

/// Pull the trimmed text out of a Messages API response body
fn extract_text(body: &serde_json::Value) -> Option<String> {
    body.get("content")?
        .as_array()?
        .iter()
        .find(|block| block.get("type").and_then(|t| t.as_str()) == Some("text"))?
        .get("text")?
        .as_str()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
#[path = "anthropic_tests.rs"]
mod anthropic_tests;
