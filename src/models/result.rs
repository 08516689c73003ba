//! Normalized outcome of an update call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SiteUpdateError};

/// Message used when a successful response carries none.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Website updated successfully";

/// Message used when a failure carries no description.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Outcome of an update call. Exactly one variant per call.
///
/// Serializes with a `status` tag:
///
/// ```json
/// {"status": "success", "message": "...", "websiteId": "...", "website": {}}
/// {"status": "failure", "error": "...", "websiteId": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum UpdateResult {
    /// The remote service accepted the update.
    Success {
        message: String,

        /// Identifier reported by the remote service.
        #[serde(rename = "websiteId", default, skip_serializing_if = "Option::is_none")]
        identifier: Option<String>,

        /// Echo of the updated record; its shape belongs to the remote service.
        #[serde(rename = "website", default, skip_serializing_if = "Option::is_none")]
        record: Option<Value>,
    },

    /// The update was rejected or never reached the remote service.
    Failure {
        error: String,

        /// Identifier the caller asked for, if one was known.
        #[serde(rename = "websiteId", default, skip_serializing_if = "Option::is_none")]
        identifier: Option<String>,
    },
}

/// Payload of a successful update, for `?`-style callers.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedWebsite {
    pub message: String,
    pub identifier: Option<String>,
    pub record: Option<Value>,
}

impl UpdateResult {
    /// Build a failure, substituting a fallback for an empty message.
    pub fn failure(error: impl Into<String>, identifier: Option<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            error
        };
        Self::Failure { error, identifier }
    }

    /// Build a failure from an error value.
    ///
    /// The message includes each underlying cause, so a refused connection
    /// reads as more than "error sending request".
    pub fn from_error(err: &SiteUpdateError, identifier: Option<String>) -> Self {
        Self::failure(describe_error(err), identifier)
    }

    /// Returns true for [`UpdateResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The identifier carried by either variant.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Success { identifier, .. } | Self::Failure { identifier, .. } => {
                identifier.as_deref()
            }
        }
    }

    /// The error message, if this is a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { error, .. } => Some(error),
            Self::Success { .. } => None,
        }
    }

    /// The echoed record, if this is a success that carried one.
    pub fn record(&self) -> Option<&Value> {
        match self {
            Self::Success { record, .. } => record.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    /// Convert into a `Result`.
    ///
    /// A failure becomes [`SiteUpdateError::Api`] without a status code.
    pub fn into_result(self) -> Result<UpdatedWebsite> {
        match self {
            Self::Success {
                message,
                identifier,
                record,
            } => Ok(UpdatedWebsite {
                message,
                identifier,
                record,
            }),
            Self::Failure { error, .. } => Err(SiteUpdateError::Api {
                message: error,
                status_code: None,
            }),
        }
    }
}

/// Render an error and its `source()` chain as `outer: cause: root`.
///
/// Causes whose text is already part of the message are skipped.
pub(crate) fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message = format!("{message}: {text}");
        }
        source = cause.source();
    }
    message
}
