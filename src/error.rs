//! User-facing session error taxonomy
//!
//! Every failure a session can surface falls into one of three buckets:
//! capture problems, advisor communication problems, and preview problems.
//! Errors never escape the session as panics or propagated `Err`s; they are
//! rendered to text here and shown in the UI.

use thiserror::Error;

use crate::advisor::AdvisorError;
use crate::capture::CaptureError;

/// A failure surfaced by a suggestion session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Screen capture could not start or produced no usable frame
    #[error("capture unavailable: {0}")]
    CaptureUnavailable(#[from] CaptureError),

    /// The advisor call failed or returned unusable data
    #[error("communication error: {0}")]
    Communication(#[from] AdvisorError),

    /// The live stream preview could not be rendered
    #[error("preview error: {0}")]
    Preview(String),
}

impl SessionError {
    /// Render this error as the message shown to the player
    ///
    /// Capture failures are matched exhaustively so every variant gets a
    /// deliberate message rather than a raw Debug dump.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::CaptureUnavailable(err) => match err {
                CaptureError::PermissionDenied => {
                    "Could not start screen capture. Please grant permission and try again."
                        .to_string()
                }
                CaptureError::CommandNotFound(program) => format!(
                    "Capture command '{program}' was not found. Check the [capture] section of your config."
                ),
                CaptureError::Aborted(detail) => {
                    format!("Screen capture was interrupted: {detail}")
                }
                CaptureError::NoStream => "No active screen capture stream.".to_string(),
                CaptureError::EmptyFrame => {
                    "Could not capture the screen for analysis.".to_string()
                }
                CaptureError::Io(err) => format!("Screen capture failed: {err}"),
            },
            SessionError::Communication(err) => {
                format!("Failed to get suggestions from the advisor: {err}")
            }
            SessionError::Preview(detail) => {
                format!("Could not display the screen preview: {detail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_asks_the_user_to_grant_access() {
        let err = SessionError::CaptureUnavailable(CaptureError::PermissionDenied);
        assert!(err.user_message().contains("grant permission"));
    }

    #[test]
    fn command_not_found_names_the_program() {
        let err =
            SessionError::CaptureUnavailable(CaptureError::CommandNotFound("grim".to_string()));
        assert!(err.user_message().contains("'grim'"));
    }

    #[test]
    fn advisor_failures_carry_the_cause() {
        let err = SessionError::Communication(AdvisorError::Api {
            code: 529,
            message: "overloaded".to_string(),
        });
        let message = err.user_message();
        assert!(message.contains("advisor"));
        assert!(message.contains("529"));
    }
}
