//! Tests for the judge module.

use super::client::{extract_generated_text, EvaluationResult, JudgeClient};
use crate::config::JudgeConfig;
use crate::error::FacevalError;
use serde_json::json;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

/// Drive the blocking client from async test code.
async fn evaluate(client: JudgeClient, query: &str, answer: &str) -> EvaluationResult {
    let query = query.to_string();
    let answer = answer.to_string();
    tokio::task::spawn_blocking(move || client.evaluate(&query, &answer))
        .await
        .expect("judge evaluation task panicked")
}

#[test]
fn test_client_requires_url() {
    let result = JudgeClient::new(JudgeConfig::new(""));
    assert!(matches!(result, Err(FacevalError::MissingJudgeUrl)));
}

#[test]
fn test_extract_generated_text_key_priority() {
    let body = json!({"text": "second", "generated_text": "first"});
    assert_eq!(extract_generated_text(&body), "first");

    let body = json!({"output": "last", "response": "third"});
    assert_eq!(extract_generated_text(&body), "third");

    let body = json!({"text": "only"});
    assert_eq!(extract_generated_text(&body), "only");
}

#[test]
fn test_extract_generated_text_non_string_value() {
    let body = json!({"text": 42});
    assert_eq!(extract_generated_text(&body), "42");
}

#[test]
fn test_extract_generated_text_fallback_stringifies_body() {
    let body = json!({"foo": "bar"});
    assert_eq!(extract_generated_text(&body), r#"{"foo":"bar"}"#);
}

#[tokio::test]
async fn test_evaluate_solved() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/"))
        .and(matchers::header("content-type", "application/json"))
        .and(matchers::body_partial_json(json!({
            "max_new_tokens": 512,
            "do_sample": false,
            "top_p": 1.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "Answer Status\nSolved\nReason: complete"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JudgeClient::new(JudgeConfig::new(mock_server.uri())).unwrap();
    let result = evaluate(client, "List two colors.", "Red and blue.").await;

    assert!(result.is_solved);
    assert!(result.evaluation.contains("Solved"));
}

#[tokio::test]
async fn test_evaluate_unsolved() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generated_text": "Answer Status\nUnsolved\nReason: refused"
        })))
        .mount(&mock_server)
        .await;

    let client = JudgeClient::new(JudgeConfig::new(mock_server.uri())).unwrap();
    let result = evaluate(client, "q", "I can't help with that.").await;

    assert!(!result.is_solved);
}

#[tokio::test]
async fn test_evaluate_schema_drift_uses_stringified_body() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "foo": "Answer Status\nSolved"
        })))
        .mount(&mock_server)
        .await;

    let client = JudgeClient::new(JudgeConfig::new(mock_server.uri())).unwrap();
    let result = evaluate(client, "q", "a").await;

    // No known text key: the stringified body still carries the verdict.
    assert!(result.is_solved);
}

#[tokio::test]
async fn test_evaluate_prompt_echoing_judge() {
    let mock_server = MockServer::start().await;

    // The echoed worked example says Unsolved; only the final status line
    // carries the real verdict.
    let echoed = "Answer Status: Unsolved\nReason: example from the prompt\n\
                  ...\n\
                  Answer Status: Solved\nReason: the actual verdict";

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": echoed })))
        .mount(&mock_server)
        .await;

    let client = JudgeClient::new(JudgeConfig::new(mock_server.uri())).unwrap();
    let result = evaluate(client, "q", "a").await;

    assert!(result.is_solved);
    assert_eq!(
        result.evaluation,
        "Answer Status: Solved\nReason: the actual verdict"
    );
}

#[tokio::test]
async fn test_evaluate_non_2xx_is_unsolved() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("judge overloaded"))
        .mount(&mock_server)
        .await;

    let client = JudgeClient::new(JudgeConfig::new(mock_server.uri())).unwrap();
    let result = evaluate(client, "q", "a").await;

    assert!(!result.is_solved);
    assert!(result.evaluation.contains("500"));
    assert!(result.evaluation.contains("judge overloaded"));
}

#[tokio::test]
async fn test_evaluate_invalid_json_body_is_unsolved() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = JudgeClient::new(JudgeConfig::new(mock_server.uri())).unwrap();
    let result = evaluate(client, "q", "a").await;

    assert!(!result.is_solved);
    assert!(result.evaluation.contains("Unsolved"));
}

#[tokio::test]
async fn test_evaluate_connection_refused_is_unsolved() {
    // Port 1 is never listening; the connect fails immediately.
    let client = JudgeClient::new(JudgeConfig::new("http://127.0.0.1:1")).unwrap();
    let result = evaluate(client, "q", "a").await;

    assert!(!result.is_solved);
    assert!(result.evaluation.contains("Unsolved"));
}
