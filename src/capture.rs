//! Screen capture adapter
//!
//! Turns a live capture source into compressed still frames for the advisor.
//! The actual capture mechanism is behind the [`CaptureBackend`] /
//! [`FrameSource`] traits; the built-in backend shells out to an external
//! screenshot program (see [`command`]).

use thiserror::Error;

pub mod command;

pub use command::CommandCapture;

/// Errors that can occur while acquiring or reading a capture source
///
/// Closed set: the boundary that produces user messages matches these
/// exhaustively (see `error::SessionError::user_message`).
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The user (or OS) refused screen capture permission
    #[error("screen capture permission denied")]
    PermissionDenied,

    /// The configured capture program does not exist
    #[error("capture command not found: {0}")]
    CommandNotFound(String),

    /// The capture run was interrupted or exited with an error
    #[error("capture aborted: {0}")]
    Aborted(String),

    /// No capture stream is currently active
    #[error("no active capture stream")]
    NoStream,

    /// The source produced a zero-size frame
    #[error("captured frame was empty")]
    EmptyFrame,

    /// I/O failure while talking to the capture source
    #[error("capture I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One captured frame, compressed and ready to send to the advisor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Encoded image bytes (JPEG or PNG, as produced by the backend)
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`, e.g. `image/jpeg`
    pub mime_type: String,
}

/// An open, live capture source
///
/// Owned by the session for the lifetime of one sitting; dropping it
/// releases the underlying stream.
pub trait FrameSource {
    /// Grab a snapshot of the current frame
    fn grab(&mut self) -> Result<Frame, CaptureError>;

    /// Whether the source has ended on its own (e.g. the user revoked
    /// sharing externally). Polled by the session on every pump; a
    /// terminated source triggers the normal stop transition.
    fn terminated(&self) -> bool {
        false
    }
}

/// Factory for capture sources
///
/// `acquire` is the "begin sharing" step: it may prompt the user or the OS
/// and can fail with any [`CaptureError`] variant.
pub trait CaptureBackend {
    fn acquire(&self) -> Result<Box<dyn FrameSource>, CaptureError>;
}
