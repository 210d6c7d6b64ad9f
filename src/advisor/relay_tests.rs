//! Tests for the relay advisor wire shapes

use super::*;

#[test]
fn request_body_matches_the_relay_contract() {
    let frame = Frame {
        bytes: b"img".to_vec(),
        mime_type: "image/jpeg".to_string(),
    };
    let body = RelayAdvisor::request_body(&frame, "1. Draw from stockpile");

    assert_eq!(body["imageBase64"], "aW1n");
    assert_eq!(body["lastMoves"], "1. Draw from stockpile");
    // Exactly the two fields the relay expects
    assert_eq!(body.as_object().map(|o| o.len()), Some(2));
}

#[test]
fn prior_moves_are_sent_raw_not_as_a_prompt() {
    let frame = Frame {
        bytes: Vec::from([1, 2, 3]),
        mime_type: "image/png".to_string(),
    };
    let body = RelayAdvisor::request_body(&frame, "");
    assert_eq!(body["lastMoves"], "");
}

#[test]
fn relay_error_message_prefers_the_message_field() {
    assert_eq!(
        relay_error_message(r#"{"message":"Missing imageBase64"}"#),
        "Missing imageBase64"
    );
    assert_eq!(relay_error_message("upstream timeout"), "upstream timeout");
    assert_eq!(relay_error_message(r#"{"detail":"x"}"#), r#"{"detail":"x"}"#);
}
