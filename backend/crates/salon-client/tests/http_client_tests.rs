//! HTTP client behaviour against a wiremock server

mod common;

use common::{TOKEN, closed_port_url, error_body, user_json};
use salon_client::{ClientError, ClientEvent, HttpClient, MemoryTokenStorage};

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tokio::sync::broadcast::error::TryRecvError;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn client(server: &MockServer) -> HttpClient {
    HttpClient::new(&server.uri(), Duration::from_secs(5))
}

#[tokio::test]
async fn test_get_decodes_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "user": user_json()})),
        )
        .mount(&mock_server)
        .await;

    let result: Option<Value> = client(&mock_server).get("/auth/me").await.unwrap();

    assert_eq!(result.unwrap()["user"]["email"], "ana@example.com");
}

#[tokio::test]
async fn test_bearer_header_sent_from_storage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).with_token_storage(Arc::new(MemoryTokenStorage::with_token(TOKEN)));
    let result: Option<Value> = client.get("/auth/me").await.unwrap();

    assert_eq!(result.unwrap()["ok"], true);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services"))
        .and(body_json(json!({"name": "Corte"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
        .mount(&mock_server)
        .await;

    let result: Option<Value> = client(&mock_server)
        .post("/services", &json!({"name": "Corte"}))
        .await
        .unwrap();

    assert_eq!(result.unwrap()["id"], 7);
}

#[tokio::test]
async fn test_no_content_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/services/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let result: Option<Value> = client(&mock_server).delete("/services/7").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_error_status_uses_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/services/7"))
        .respond_with(ResponseTemplate::new(409).set_body_json(error_body("CONFLICT", "Already booked")))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .put::<_, Value>("/services/7", &json!({}))
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Already booked");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_without_body_uses_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/7"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .patch::<_, Value>("/services/7", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Error 502");
}

#[tokio::test]
async fn test_unauthorized_fires_one_event() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_body("UNAUTHORIZED", "Invalid or expired token")))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let mut events = client.subscribe();

    let err = client.get::<Value>("/auth/me").await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized { .. }));
    assert_eq!(err.user_message(), "Invalid or expired token");
    assert_eq!(events.try_recv(), Ok(ClientEvent::Unauthorized));
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_unauthorized_without_subscribers_still_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).get::<Value>("/auth/me").await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized { .. }));
    assert_eq!(err.user_message(), "Error 401");
}

#[tokio::test]
async fn test_raw_execute_does_not_fire_event() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_body("UNAUTHORIZED", "Invalid credentials")))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let mut events = client.subscribe();

    let raw = client
        .execute(client.request(reqwest::Method::POST, "/auth/login"))
        .await
        .unwrap();

    assert_eq!(raw.status.as_u16(), 401);
    assert_eq!(raw.error_message(), "Invalid credentials");
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&mock_server.uri(), Duration::from_millis(100));
    let err = client.get::<Value>("/slow").await.unwrap_err();

    match err {
        ClientError::Timeout { ms, .. } => assert_eq!(ms, 100),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let client = HttpClient::new(&closed_port_url(), Duration::from_secs(2));

    let err = client.get::<Value>("/health").await.unwrap_err();

    assert!(matches!(err, ClientError::Connection { .. }));
}

#[tokio::test]
async fn test_success_with_non_json_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).get::<Value>("/health").await.unwrap_err();

    assert!(matches!(err, ClientError::MalformedResponse { .. }));
}
