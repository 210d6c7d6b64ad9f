//! Tests for the command capture backend

use super::*;

fn sh(script: &str) -> CommandFrameSource {
    CommandFrameSource {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
    }
}

#[test]
fn grab_returns_stdout_bytes() {
    let mut source = sh("printf 'not-really-a-jpeg'");
    let frame = source.grab().expect("grab should succeed");
    assert_eq!(frame.bytes, b"not-really-a-jpeg");
    assert_eq!(frame.mime_type, "image/jpeg");
}

#[test]
fn grab_detects_png_output() {
    // \211PNG magic prefix
    let mut source = sh("printf '\\211PNG\\r\\n\\032\\nrest'");
    let frame = source.grab().expect("grab should succeed");
    assert_eq!(frame.mime_type, "image/png");
}

#[test]
fn empty_output_is_an_empty_frame() {
    let mut source = sh("true");
    let err = source.grab().expect_err("empty stdout should fail");
    assert!(matches!(err, CaptureError::EmptyFrame));
}

#[test]
fn nonzero_exit_is_aborted_with_stderr() {
    let mut source = sh("echo 'compositor said no' >&2; exit 1");
    let err = source.grab().expect_err("nonzero exit should fail");
    match err {
        CaptureError::Aborted(detail) => assert_eq!(detail, "compositor said no"),
        other => panic!("expected Aborted, got {other:?}"),
    }
}

#[test]
fn missing_program_fails_at_acquire() {
    let backend = CommandCapture::new(
        "definitely-not-a-real-screenshot-tool".to_string(),
        Vec::new(),
    );
    let err = backend.acquire().err().expect("acquire should fail");
    match err {
        CaptureError::CommandNotFound(program) => {
            assert_eq!(program, "definitely-not-a-real-screenshot-tool");
        }
        other => panic!("expected CommandNotFound, got {other:?}"),
    }
}

#[test]
fn resolvable_program_acquires_a_source() {
    let backend = CommandCapture::new("sh".to_string(), vec!["-c".to_string(), "true".to_string()]);
    assert!(backend.acquire().is_ok());
}

#[test]
fn sniff_defaults_to_jpeg() {
    assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF]), "image/jpeg");
    assert_eq!(sniff_mime(b"garbage"), "image/jpeg");
    assert_eq!(sniff_mime(&[0x89, b'P', b'N', b'G']), "image/png");
}
