//! Integration tests for the Retell client against a mocked upstream.
//!
//! All tests use wiremock; none requires a real API key.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use relay_retell::{RetellClient, RetellError};

fn payload(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().expect("test payload must be an object").clone()
}

#[tokio::test]
async fn create_web_call_decodes_success_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/create-web-call"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "access_token": "t1",
            "call_id": "c1",
            "agent_id": "a1",
            "call_status": "registered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RetellClient::new(server.uri(), "test-key");
    let call = client
        .create_web_call(&payload(json!({"agent_id": "a1"})))
        .await
        .unwrap();

    assert_eq!(call.access_token, "t1");
    assert_eq!(call.call_id, "c1");
    assert_eq!(call.agent_id, "a1");
}

#[tokio::test]
async fn payload_is_forwarded_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/create-web-call"))
        .and(body_json(json!({
            "agent_id": "custom",
            "metadata": {"user": "u-42"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "t", "call_id": "c", "agent_id": "custom"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RetellClient::new(server.uri(), "k");
    client
        .create_web_call(&payload(json!({
            "agent_id": "custom",
            "metadata": {"user": "u-42"}
        })))
        .await
        .unwrap();
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/create-web-call"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = RetellClient::new(server.uri(), "k");
    let err = client
        .create_web_call(&payload(json!({"agent_id": "a"})))
        .await
        .unwrap_err();

    assert!(matches!(err, RetellError::Api { status: 429, .. }));
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn connection_refused_maps_to_http_error() {
    // Port 9 (discard) is assumed closed.
    let client = RetellClient::new("http://127.0.0.1:9", "k");
    let err = client
        .create_web_call(&payload(json!({"agent_id": "a"})))
        .await
        .unwrap_err();

    assert!(matches!(err, RetellError::Http(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn malformed_success_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/create-web-call"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = RetellClient::new(server.uri(), "k");
    let err = client
        .create_web_call(&payload(json!({"agent_id": "a"})))
        .await
        .unwrap_err();

    assert!(matches!(err, RetellError::Decode(_)));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/create-web-call"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "t", "call_id": "c", "agent_id": "a"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RetellClient::new(format!("{}/", server.uri()), "k");
    client
        .create_web_call(&payload(json!({"agent_id": "a"})))
        .await
        .unwrap();
}
