//! Tests for content, message and request types.

use placard_core::{
    Content, ContentBlock, GenerateRequest, GenerateResponse, Message, Role, TokenUsageData,
};
use serde_json::json;

#[test]
fn test_text_content_serializes_as_plain_string() {
    let content = Content::from("Which style do you prefer?");
    let value = serde_json::to_value(&content).expect("Serializable");
    assert_eq!(value, json!("Which style do you prefer?"));
}

#[test]
fn test_block_content_serializes_as_typed_array() {
    let content = Content::Blocks(vec![
        ContentBlock::document("application/pdf", "JVBERi0xLjQ="),
        ContentBlock::text("Analyze this brand guideline document"),
    ]);
    let value = serde_json::to_value(&content).expect("Serializable");
    assert_eq!(
        value,
        json!([
            {"type": "document", "media_type": "application/pdf", "data": "JVBERi0xLjQ="},
            {"type": "text", "text": "Analyze this brand guideline document"}
        ])
    );
}

#[test]
fn test_content_deserializes_either_shape() {
    let text: Content = serde_json::from_value(json!("plain")).expect("Valid text");
    assert_eq!(text, Content::Text("plain".to_string()));

    let blocks: Content =
        serde_json::from_value(json!([{"type": "text", "text": "a"}])).expect("Valid blocks");
    assert_eq!(blocks, Content::Blocks(vec![ContentBlock::text("a")]));
}

#[test]
fn test_text_skips_documents() {
    let content = Content::Blocks(vec![
        ContentBlock::text("first"),
        ContentBlock::document("application/pdf", "AAAA"),
        ContentBlock::text("second"),
    ]);
    assert_eq!(content.text(), "first\nsecond");
    assert!(!content.is_empty());
}

#[test]
fn test_empty_content() {
    assert!(Content::Blocks(vec![]).is_empty());
    assert!(Content::from("").is_empty());
    assert!(Content::from(" \n").is_empty());
    assert!(Content::Blocks(vec![ContentBlock::text("  ")]).is_empty());
    assert!(!Content::Blocks(vec![ContentBlock::document("application/pdf", "")]).is_empty());
}

#[test]
fn test_message_roles_serialize_lowercase() {
    let message = Message::assistant("Option 1: washed green");
    let value = serde_json::to_value(&message).expect("Serializable");
    assert_eq!(value["role"], "assistant");
    assert_eq!(value["content"], "Option 1: washed green");
    assert_eq!(Role::User.to_string(), "user");
}

#[test]
fn test_generate_request_builder_defaults() {
    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hello")])
        .max_tokens(1024u32)
        .build()
        .expect("Valid request");

    assert_eq!(request.messages().len(), 1);
    assert_eq!(*request.max_tokens(), Some(1024));
    assert!(request.system().is_none());
    assert!(request.model().is_none());
}

#[test]
fn test_generate_response_builder() {
    let response = GenerateResponse::builder()
        .content(Content::from("done"))
        .usage(Some(TokenUsageData::new(10, 5)))
        .build()
        .expect("Valid response");

    assert_eq!(response.content().text(), "done");
    assert_eq!(response.usage().as_ref().map(|u| u.total_tokens()), Some(15));
    assert_eq!(response.into_content(), Content::from("done"));
}
