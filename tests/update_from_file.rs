//! Tests for `UpdateClient::update_from_file`.

use std::io::Write;

use serde_json::{json, Value};
use siteupdate::{UpdateClient, UpdateOptions, UpdateResult};
use tempfile::NamedTempFile;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_document(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_document_sent_whole_as_updates() {
    let mock_server = MockServer::start().await;

    let document = json!({
        "websiteId": "abc123",
        "title": "Landing",
        "sections": ["hero", "contact"]
    });

    Mock::given(method("PUT"))
        .and(path("/api/update-website"))
        .and(body_json(json!({
            "identifier": "abc123",
            "updates": document.clone(),
            "sendNotification": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "saved",
            "websiteId": "abc123",
            "website": document.clone()
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let file = write_document(&document.to_string());
    let client = UpdateClient::new().unwrap().with_base_url(mock_server.uri());

    let result = client
        .update_from_file(Some(file.path()), &UpdateOptions::default())
        .await;

    assert_eq!(
        result,
        UpdateResult::Success {
            message: "saved".to_string(),
            identifier: Some("abc123".to_string()),
            record: Some(document),
        }
    );
}

#[tokio::test]
async fn test_document_without_identifier_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let file = write_document(r#"{"title": "No id here"}"#);
    let client = UpdateClient::new().unwrap().with_base_url(mock_server.uri());

    let result = client
        .update_from_file(Some(file.path()), &UpdateOptions::default())
        .await;

    assert_eq!(
        result,
        UpdateResult::Failure {
            error: "No websiteId found in website data".to_string(),
            identifier: None,
        }
    );
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_json_document_is_a_failure() {
    let file = write_document("{ not json");
    let client = UpdateClient::new().unwrap();

    let result = client
        .update_from_file(Some(file.path()), &UpdateOptions::default())
        .await;

    assert!(!result.is_success());
    assert_eq!(result.identifier(), None);
}

#[tokio::test]
async fn test_missing_file_is_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let client = UpdateClient::new().unwrap();

    let result = client
        .update_from_file(
            Some(&dir.path().join("website-data.json")),
            &UpdateOptions::default(),
        )
        .await;

    assert!(!result.is_success());
    assert!(!result.error().unwrap().is_empty());
}

#[tokio::test]
async fn test_options_forwarded_from_file_entry_point() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/update-website"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let file = write_document(r#"{"websiteId": "site-9", "theme": "dark"}"#);
    let client = UpdateClient::new().unwrap();
    let options = UpdateOptions::default()
        .with_send_notification(false)
        .with_endpoint_override(mock_server.uri());

    let result = client.update_from_file(Some(file.path()), &options).await;
    assert!(result.is_success());

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["identifier"], "site-9");
    assert_eq!(body["sendNotification"], false);
    assert_eq!(body["updates"]["theme"], "dark");
}
