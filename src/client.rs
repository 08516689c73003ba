//! Website update client.
//!
//! Resolves the update-website endpoint, sends the PUT through a
//! [`Transport`] and folds every outcome into an [`UpdateResult`].

use std::env;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::endpoint::EndpointResolver;
use crate::error::Result;
use crate::models::{
    UpdateRequest, UpdateResult, WebsiteDocument, DEFAULT_DOCUMENT_PATH, DEFAULT_SUCCESS_MESSAGE,
};
use crate::options::UpdateOptions;
use crate::transport::{ReqwestTransport, Transport, TransportResponse};

/// Environment variable holding the configured base URL.
pub const BASE_URL_ENV: &str = "SITEUPDATE_BASE_URL";

/// Environment variable holding the ambient origin.
pub const ORIGIN_ENV: &str = "SITEUPDATE_ORIGIN";

/// Client for the update-website operation.
///
/// Every call is independent: the endpoint is resolved per call and nothing
/// is cached between calls. Cheaply cloneable; clones share the transport.
///
/// # Example
///
/// ```no_run
/// use serde_json::json;
/// use siteupdate::{UpdateClient, UpdateOptions, UpdateResult};
///
/// # async fn example() -> siteupdate::Result<()> {
/// let client = UpdateClient::from_env()?;
///
/// let updates = json!({"title": "Spring Sale"});
/// let updates = updates.as_object().cloned().unwrap_or_default();
///
/// match client.update("site-42", updates, &UpdateOptions::default()).await {
///     UpdateResult::Success { message, .. } => println!("{message}"),
///     UpdateResult::Failure { error, .. } => eprintln!("update failed: {error}"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct UpdateClient<T = ReqwestTransport> {
    transport: Arc<T>,
    origin: Option<String>,
    base_url: Option<String>,
}

impl<T> Clone for UpdateClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            origin: self.origin.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl<T> std::fmt::Debug for UpdateClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateClient")
            .field("origin", &self.origin)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl UpdateClient<ReqwestTransport> {
    /// Create a client with no origin and no configured base URL.
    ///
    /// Without an override, calls go to the relative update-website path.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(ReqwestTransport::new()?))
    }

    /// Create a client from environment variables.
    ///
    /// Reads `SITEUPDATE_BASE_URL` as the configured base URL and
    /// `SITEUPDATE_ORIGIN` as the ambient origin. Both are optional; empty
    /// values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        let mut client = Self::new()?;
        client.base_url = non_empty_env(BASE_URL_ENV);
        client.origin = non_empty_env(ORIGIN_ENV);
        Ok(client)
    }
}

impl<T: Transport> UpdateClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            origin: None,
            base_url: None,
        }
    }

    /// Set the ambient origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the configured base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The transport this client sends through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The endpoint strategy a call with `options` would use.
    pub fn resolver(&self, options: &UpdateOptions) -> EndpointResolver {
        EndpointResolver::select(
            options.endpoint_override.as_deref(),
            self.origin.as_deref(),
            self.base_url.as_deref(),
        )
    }

    /// Update a website record.
    ///
    /// Sends `{identifier, updates, sendNotification}` as one PUT. Never
    /// fails: transport errors, unparseable bodies and rejected updates all
    /// come back as [`UpdateResult::Failure`] carrying `identifier`.
    #[tracing::instrument(skip(self, updates, options))]
    pub async fn update(
        &self,
        identifier: &str,
        updates: Map<String, Value>,
        options: &UpdateOptions,
    ) -> UpdateResult {
        match self.try_update(identifier, updates, options).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "website update did not complete");
                UpdateResult::from_error(&e, Some(identifier.to_string()))
            }
        }
    }

    /// Update a website from a JSON document on disk.
    ///
    /// Reads `path` (default `website-data.json`), takes its `websiteId`
    /// and sends the whole document as the update. A document without an
    /// identifier fails before any request is made. Never fails otherwise:
    /// read and parse errors come back as [`UpdateResult::Failure`].
    #[tracing::instrument(skip(self, options))]
    pub async fn update_from_file(
        &self,
        path: Option<&Path>,
        options: &UpdateOptions,
    ) -> UpdateResult {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_DOCUMENT_PATH));

        let document = match WebsiteDocument::load(path).await {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not use website document"
                );
                return UpdateResult::from_error(&e, None);
            }
        };

        self.update(&document.identifier, document.fields, options)
            .await
    }

    async fn try_update(
        &self,
        identifier: &str,
        updates: Map<String, Value>,
        options: &UpdateOptions,
    ) -> Result<UpdateResult> {
        let resolver = self.resolver(options);
        let endpoint = resolver.endpoint();
        tracing::debug!(source = resolver.source(), %endpoint, "resolved update endpoint");

        let request = UpdateRequest::new(identifier, updates, options.send_notification);
        let response = self.transport.put_json(&endpoint, &request).await?;
        tracing::debug!(status = response.status, "update-website responded");

        normalize_response(identifier, response)
    }
}

/// Map a raw response onto an [`UpdateResult`].
///
/// A rejection may carry an empty body; an accepted update must carry JSON.
fn normalize_response(identifier: &str, response: TransportResponse) -> Result<UpdateResult> {
    if !response.is_success() {
        let body = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body)?
        };
        let error = string_field(&body, "error").unwrap_or_else(|| {
            format!("HTTP {} {}", response.status, response.status_text)
                .trim_end()
                .to_string()
        });
        tracing::warn!(status = response.status, %error, "website update rejected");
        return Ok(UpdateResult::failure(error, Some(identifier.to_string())));
    }

    let body: Value = serde_json::from_str(&response.body)?;

    Ok(UpdateResult::Success {
        message: string_field(&body, "message")
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        identifier: string_field(&body, "websiteId"),
        record: body.get("website").filter(|v| !v.is_null()).cloned(),
    })
}

// Blank strings count as absent.
fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
