// Configuration type definitions

use serde::Deserialize;

/// Which advisor backend to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorProviderType {
    /// Call the Anthropic Messages API directly
    #[default]
    Anthropic,
    /// Call a same-origin relay that attaches credentials server-side
    Relay,
}

/// Anthropic configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    /// API key; `ANTHROPIC_API_KEY` is used when absent
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        AnthropicConfig {
            api_key: None,
            model: None,
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_max_tokens() -> u32 {
    1000
}

/// Relay configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RelayConfig {
    #[serde(default)]
    pub url: Option<String>,
}

/// Advisor configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub provider: AdvisorProviderType,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}

/// Screen capture configuration section
///
/// The command must write one encoded image to stdout per invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_capture_command")]
    pub command: String,
    #[serde(default = "default_capture_args")]
    pub args: Vec<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            command: default_capture_command(),
            args: default_capture_args(),
        }
    }
}

fn default_capture_command() -> String {
    if cfg!(target_os = "macos") {
        "screencapture".to_string()
    } else {
        "grim".to_string()
    }
}

fn default_capture_args() -> Vec<String> {
    if cfg!(target_os = "macos") {
        ["-x", "-t", "jpg", "/dev/stdout"]
            .map(str::to_string)
            .to_vec()
    } else {
        ["-t", "jpeg", "-"].map(str::to_string).to_vec()
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
}
