//! Mock update-website server for E2E testing.
//!
//! This module provides an in-memory mock of the remote service for
//! integration and end-to-end testing. Unlike wiremock which mocks at the
//! HTTP level per-test, this server keeps website records across requests,
//! merges partial updates and records the notifications it would send.
//!
//! # Example
//!
//! ```ignore
//! use siteupdate::mock_server::MockServer;
//! use siteupdate::{UpdateClient, UpdateOptions};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = UpdateClient::new().unwrap().with_base_url(server.url());
//!
//!     // Server comes with default fixtures
//!     let result = client
//!         .update("site-1", Default::default(), &UpdateOptions::default())
//!         .await;
//!     assert!(result.is_success());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockState, SentNotification};
