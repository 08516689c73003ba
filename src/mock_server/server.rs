//! Mock update-website server.
//!
//! Provides an axum-based HTTP server that simulates the remote service.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;
use crate::UPDATE_WEBSITE_PATH;

/// A mock update-website server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a stateful implementation of the remote service.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL as the endpoint override or configured base URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        scenario
            .websites
            .into_iter()
            .fold(MockState::new(), |state, (id, record)| {
                state.with_website(&id, record)
            })
    }

    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            .route(UPDATE_WEBSITE_PATH, put(handlers::update_website))
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UpdateClient, UpdateOptions, UpdateResult};

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_update_with_client() {
        let server = MockServer::start().await;
        let client = UpdateClient::new().unwrap().with_base_url(server.url());

        let mut updates = serde_json::Map::new();
        updates.insert("tagline".to_string(), "Now open".into());

        let result = client
            .update("site-1", updates, &UpdateOptions::default())
            .await;

        assert!(result.is_success());
        assert_eq!(result.identifier(), Some("site-1"));
        assert_eq!(result.record().unwrap()["tagline"], "Now open");
        assert_eq!(result.record().unwrap()["title"], "Test Website");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = UpdateClient::new().unwrap().with_base_url(server.url());

        let result = client
            .update("site-1", serde_json::Map::new(), &UpdateOptions::default())
            .await;

        assert_eq!(
            result,
            UpdateResult::Failure {
                error: "Website not found".to_string(),
                identifier: Some("site-1".to_string()),
            }
        );

        server.shutdown().await;
    }
}
