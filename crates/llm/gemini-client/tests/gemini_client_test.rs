//! Integration tests for [`gemini_client::GeminiClient`] against a mockito server.

use std::time::Duration;

use gemini_client::{Content, GeminiClient, GeminiConfig, GeminiError, GenerateContentRequest, GenerativeClient};
use mockito::Matcher;

const PATH: &str = "/v1beta/models/gemini-2.5-pro:generateContent";

fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
    let config = GeminiConfig::new("test-key")
        .with_base_url(format!("{}/v1beta", server.url()))
        .with_timeout(Duration::from_secs(5));
    GeminiClient::new(config).unwrap()
}

fn request() -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text("User: hello")],
    }
}

/// **Test: key header and JSON body are sent; first candidate text is returned.**
#[tokio::test]
async fn test_generate_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "contents": [{"parts": [{"text": "User: hello"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"- Hello there"}],"role":"model"}}]}"#)
        .create_async()
        .await;

    let text = client_for(&server).generate(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(text, "- Hello there");
}

/// **Test: a 500 becomes `Status` carrying the body.**
#[tokio::test]
async fn test_generate_non_success_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let err = client_for(&server).generate(&request()).await.unwrap_err();

    match &err {
        GeminiError::Status { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "oops");
        }
        other => panic!("expected Status, got {other:?}"),
    }
    assert_eq!(err.to_reply(), "Error 500: oops");
}

/// **Test: 200 without candidates is a malformed response.**
#[tokio::test]
async fn test_generate_missing_candidates() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let err = client_for(&server).generate(&request()).await.unwrap_err();

    assert!(matches!(err, GeminiError::MalformedResponse(_)));
    assert!(err.to_reply().starts_with("Error: "));
}

/// **Test: a connection failure is a `Request` error rendered as "Error: ...".**
#[tokio::test]
async fn test_generate_connection_refused() {
    let config = GeminiConfig::new("k")
        .with_base_url("http://127.0.0.1:1/v1beta")
        .with_timeout(Duration::from_secs(2));
    let err = GeminiClient::new(config)
        .unwrap()
        .generate(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Request(_)));
    assert!(err.to_reply().starts_with("Error: "));
}
