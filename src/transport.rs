//! HTTP transport for the update-website call.
//!
//! [`UpdateClient`](crate::UpdateClient) talks to the network only through
//! the [`Transport`] trait, so tests and embedders can swap in their own.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{Result, SiteUpdateError};
use crate::models::UpdateRequest;

const USER_AGENT: &str = concat!("siteupdate/", env!("CARGO_PKG_VERSION"));

/// Raw response of a PUT, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Numeric HTTP status.
    pub status: u16,
    /// Reason phrase for the status (may be empty).
    pub status_text: String,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON PUT and returns the raw response.
///
/// Implementations must not retry. Any error returned is reported to the
/// caller as a failed update using the error's message.
#[async_trait]
pub trait Transport: Send + Sync {
    /// PUT `request` as JSON to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the response
    /// body could not be read. A non-2xx status is not an error here.
    async fn put_json(&self, endpoint: &str, request: &UpdateRequest)
        -> Result<TransportResponse>;
}

/// Default [`Transport`] backed by `reqwest`.
///
/// Cheaply cloneable; clones share the connection pool.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
    ambient_base: Option<Arc<Url>>,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("ambient_base", &self.ambient_base.as_deref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Create a transport without an ambient base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(SiteUpdateError::Http)?;

        Ok(Self {
            http,
            ambient_base: None,
        })
    }

    /// Resolve relative endpoints against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not an absolute URL.
    pub fn with_ambient_base(mut self, base: &str) -> Result<Self> {
        self.ambient_base = Some(Arc::new(Url::parse(base)?));
        Ok(self)
    }

    fn resolve(&self, endpoint: &str) -> Result<Url> {
        match Url::parse(endpoint) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.ambient_base {
                Some(base) => Ok(base.join(endpoint)?),
                None => Err(url::ParseError::RelativeUrlWithoutBase.into()),
            },
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[tracing::instrument(skip(self, request))]
    async fn put_json(
        &self,
        endpoint: &str,
        request: &UpdateRequest,
    ) -> Result<TransportResponse> {
        let url = self.resolve(endpoint)?;

        let response = self
            .http
            .put(url)
            .json(request)
            .send()
            .await
            .map_err(SiteUpdateError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(SiteUpdateError::Http)?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
