//! Error types for website update operations.

use thiserror::Error;

/// Errors that can occur while updating a website.
///
/// The public operations on [`UpdateClient`](crate::UpdateClient) never
/// return these directly; they are folded into
/// [`UpdateResult::Failure`](crate::UpdateResult::Failure). They surface to
/// callers through [`UpdateResult::into_result`](crate::UpdateResult::into_result)
/// and from a custom [`Transport`](crate::Transport).
#[derive(Debug, Error)]
pub enum SiteUpdateError {
    /// The source document has no identifier field.
    #[error("No websiteId found in website data")]
    MissingIdentifier,

    /// Caller-supplied updates are malformed.
    #[error("Invalid updates: {0}")]
    InvalidUpdates(String),

    /// The remote service rejected the update.
    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// A transport failed without an underlying library error.
    #[error("{0}")]
    Transport(String),

    /// HTTP transport error.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// File read error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for website update operations.
pub type Result<T> = core::result::Result<T, SiteUpdateError>;
