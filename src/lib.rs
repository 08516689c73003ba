//! Website update client library.
//!
//! A Rust client for the update-website API: one `PUT` that applies a
//! partial update to a website record and optionally asks the remote
//! service to send a notification.
//!
//! # Quick Start
//!
//! ```no_run
//! use serde_json::json;
//! use siteupdate::{UpdateClient, UpdateOptions};
//!
//! #[tokio::main]
//! async fn main() -> siteupdate::Result<()> {
//!     // Create client from environment variables
//!     let client = UpdateClient::from_env()?;
//!
//!     // Update two fields without notifying anyone
//!     let updates = json!({"title": "Spring Sale", "theme": "light"});
//!     let options = UpdateOptions::default().with_send_notification(false);
//!     let result = client
//!         .update("site-42", updates.as_object().cloned().unwrap_or_default(), &options)
//!         .await;
//!     println!("success: {}", result.is_success());
//!
//!     // Or send a whole document from disk
//!     let result = client.update_from_file(None, &UpdateOptions::default()).await;
//!     let website = result.into_result()?;
//!     println!("{}", website.message);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Results, not errors
//!
//! [`UpdateClient::update`] and [`UpdateClient::update_from_file`] always
//! resolve to an [`UpdateResult`]. Rejections, transport failures and bad
//! documents all become [`UpdateResult::Failure`]; nothing is retried.
//!
//! # Endpoint resolution
//!
//! The endpoint is `<base>/api/update-website`, where the base is the first
//! of: the per-call override, the client's ambient origin, the configured
//! base URL. With none of them the relative path is used as-is. See
//! [`EndpointResolver`].
//!
//! # Configuration
//!
//! [`UpdateClient::from_env`] reads:
//!
//! - `SITEUPDATE_BASE_URL` (optional) - configured base URL
//! - `SITEUPDATE_ORIGIN` (optional) - ambient origin

pub mod cli;
mod client;
mod endpoint;
mod error;
mod models;
mod options;
mod output;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{UpdateClient, BASE_URL_ENV, ORIGIN_ENV};
pub use endpoint::{EndpointResolver, UPDATE_WEBSITE_PATH};
pub use error::{Result, SiteUpdateError};
pub use options::UpdateOptions;
pub use output::PrettyPrint;
pub use transport::{ReqwestTransport, Transport, TransportResponse};

// Re-export models
pub use models::{
    UpdateRequest, UpdateResult, UpdatedWebsite, WebsiteDocument, DEFAULT_DOCUMENT_PATH,
    DEFAULT_SUCCESS_MESSAGE, IDENTIFIER_FIELD, UNKNOWN_ERROR_MESSAGE,
};
