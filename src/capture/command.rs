//! Command-based capture backend
//!
//! Spawns an external screenshot program (grim, scrot, screencapture, ...)
//! and reads the encoded image from its stdout. Each `grab` is one fresh
//! invocation, so the frame always reflects the current screen.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use super::{CaptureBackend, CaptureError, Frame, FrameSource};

/// Capture backend that runs a configured screenshot command
#[derive(Debug, Clone)]
pub struct CommandCapture {
    program: String,
    args: Vec<String>,
}

impl CommandCapture {
    /// Create a backend for the given program and arguments
    ///
    /// The program must write a JPEG or PNG image to stdout, e.g.
    /// `grim -t jpeg -` on wlroots compositors.
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl CaptureBackend for CommandCapture {
    fn acquire(&self) -> Result<Box<dyn FrameSource>, CaptureError> {
        // Resolve up front so a bad config fails at start, not mid-session
        let resolved = which::which(&self.program)
            .map_err(|_| CaptureError::CommandNotFound(self.program.clone()))?;

        log::debug!("capture command resolved to {}", resolved.display());

        Ok(Box::new(CommandFrameSource {
            program: self.program.clone(),
            args: self.args.clone(),
        }))
    }
}

/// A live source backed by repeated command invocations
struct CommandFrameSource {
    program: String,
    args: Vec<String>,
}

impl FrameSource for CommandFrameSource {
    fn grab(&mut self) -> Result<Frame, CaptureError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => CaptureError::CommandNotFound(self.program.clone()),
                ErrorKind::PermissionDenied => CaptureError::PermissionDenied,
                _ => CaptureError::Io(err),
            })?;

        if !output.status.success() {
            let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CaptureError::Aborted(detail));
        }

        if output.stdout.is_empty() {
            return Err(CaptureError::EmptyFrame);
        }

        let mime_type = sniff_mime(&output.stdout).to_string();
        Ok(Frame {
            bytes: output.stdout,
            mime_type,
        })
    }
}

/// Detect the image format from magic bytes
///
/// The advisor APIs need an accurate media type; screenshot tools differ in
/// what they emit, so sniff rather than trust the configuration.
fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else {
        // JPEG magic is FF D8; treat anything else as JPEG too, matching
        // the default the advisor prompt was written against.
        "image/jpeg"
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
