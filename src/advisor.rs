//! Move advisor abstraction
//!
//! Defines the MoveAdvisor trait, AdvisorError types, and the factory for
//! creating a client from configuration. Whether suggestions come straight
//! from the model endpoint or through a credential-attaching relay is an
//! injected dependency, not a branch in the session logic.

use thiserror::Error;

use crate::capture::Frame;
use crate::config::types::{AdvisorConfig, AdvisorProviderType};

mod anthropic;
pub mod prompt;
mod relay;
pub mod response;
pub mod worker;

pub use anthropic::AnthropicAdvisor;
pub use relay::RelayAdvisor;
pub use response::{NO_MOVES_MESSAGE, SuggestionSet};

/// Errors that can occur while asking for move suggestions
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No usable advisor configuration (missing API key or relay URL)
    #[error("advisor not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request
    #[error("network error: {0}")]
    Network(String),

    /// The API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the API response
    #[error("parse error: {0}")]
    Parse(String),
}

/// A client that turns one board snapshot into free-text move suggestions
///
/// `prior_moves` is the last *shown* suggestion text, passed as context so
/// the model can pick up where the player left off; empty on the first call.
pub trait MoveAdvisor: Send {
    fn suggest(&self, frame: &Frame, prior_moves: &str) -> Result<String, AdvisorError>;
}

/// Advisor implementations selectable from configuration
#[derive(Debug)]
pub enum AdvisorKind {
    /// Direct call to the Anthropic Messages API
    Anthropic(AnthropicAdvisor),
    /// Call through a same-origin relay that attaches credentials
    Relay(RelayAdvisor),
}

impl AdvisorKind {
    /// Create an advisor from configuration
    ///
    /// Returns an error if the selected provider is missing its key or URL.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        match config.provider {
            AdvisorProviderType::Anthropic => {
                let api_key = config
                    .anthropic
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| {
                        AdvisorError::NotConfigured(
                            "missing API key: set [advisor.anthropic] api_key or ANTHROPIC_API_KEY"
                                .to_string(),
                        )
                    })?;

                let model = config
                    .anthropic
                    .model
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| anthropic::DEFAULT_MODEL.to_string());

                Ok(AdvisorKind::Anthropic(AnthropicAdvisor::new(
                    api_key,
                    model,
                    config.anthropic.max_tokens,
                )))
            }
            AdvisorProviderType::Relay => {
                let url = config
                    .relay
                    .url
                    .clone()
                    .filter(|u| !u.trim().is_empty())
                    .ok_or_else(|| {
                        AdvisorError::NotConfigured(
                            "missing or empty url in [advisor.relay] config".to_string(),
                        )
                    })?;

                Ok(AdvisorKind::Relay(RelayAdvisor::new(url)))
            }
        }
    }
}

impl MoveAdvisor for AdvisorKind {
    fn suggest(&self, frame: &Frame, prior_moves: &str) -> Result<String, AdvisorError> {
        match self {
            AdvisorKind::Anthropic(client) => client.suggest(frame, prior_moves),
            AdvisorKind::Relay(client) => client.suggest(frame, prior_moves),
        }
    }
}
