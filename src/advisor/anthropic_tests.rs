//! Tests for the Anthropic advisor (request/response shaping, no network)

use super::*;

fn jpeg_frame() -> Frame {
    Frame {
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        mime_type: "image/jpeg".to_string(),
    }
}

fn advisor() -> AnthropicAdvisor {
    AnthropicAdvisor::new(
        "sk-test".to_string(),
        DEFAULT_MODEL.to_string(),
        1000,
    )
}

#[test]
fn request_body_carries_image_then_prompt() {
    let body = advisor().request_body(&jpeg_frame(), "");

    assert_eq!(body["model"], DEFAULT_MODEL);
    assert_eq!(body["max_tokens"], 1000);

    let content = body["messages"][0]["content"]
        .as_array()
        .expect("content should be an array");
    assert_eq!(content[0]["type"], "image");
    assert_eq!(content[0]["source"]["type"], "base64");
    assert_eq!(content[0]["source"]["media_type"], "image/jpeg");
    // 0xFF 0xD8 0xFF 0xE0 in standard base64
    assert_eq!(content[0]["source"]["data"], "/9j/4A==");
    assert_eq!(content[1]["type"], "text");
}

#[test]
fn request_body_appends_prior_moves_to_the_prompt() {
    let body = advisor().request_body(&jpeg_frame(), "1. Move A♥ to foundation");
    let text = body["messages"][0]["content"][1]["text"]
        .as_str()
        .expect("text block");
    assert!(text.contains("The previous suggestions were:\n1. Move A♥ to foundation"));
}

#[test]
fn extract_text_finds_the_text_block() {
    let body = serde_json::json!({
        "content": [
            { "type": "tool_use", "id": "x" },
            { "type": "text", "text": "  1. Move 7♠ to foundation\n" },
        ]
    });
    assert_eq!(
        extract_text(&body),
        Some("1. Move 7♠ to foundation".to_string())
    );
}

#[test]
fn extract_text_rejects_bodies_without_text() {
    assert_eq!(extract_text(&serde_json::json!({})), None);
    assert_eq!(extract_text(&serde_json::json!({ "content": [] })), None);
    assert_eq!(
        extract_text(&serde_json::json!({ "content": [{ "type": "image" }] })),
        None
    );
}
