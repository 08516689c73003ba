//! Outbound request body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `PUT /api/update-website`.
///
/// `updates` is a partial update: keys present overwrite the stored
/// record, keys absent are left untouched by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    /// Identifier of the website record to update.
    pub identifier: String,

    /// Field replacements.
    #[serde(default)]
    pub updates: Map<String, Value>,

    /// Whether the remote service should send a notification.
    pub send_notification: bool,
}

impl UpdateRequest {
    /// Build a request body.
    pub fn new(
        identifier: impl Into<String>,
        updates: Map<String, Value>,
        send_notification: bool,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            updates,
            send_notification,
        }
    }
}
