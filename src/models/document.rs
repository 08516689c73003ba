//! Website documents read from disk.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, SiteUpdateError};

/// Path read by `update_from_file` when the caller gives none.
pub const DEFAULT_DOCUMENT_PATH: &str = "website-data.json";

/// Field holding the website identifier in a document.
pub const IDENTIFIER_FIELD: &str = "websiteId";

const IDENTIFIER_ALIAS: &str = "identifier";

/// A parsed website document with its identifier extracted.
///
/// The identifier stays in `fields`; the whole document is sent as the
/// update.
#[derive(Debug, Clone, PartialEq)]
pub struct WebsiteDocument {
    pub identifier: String,
    pub fields: Map<String, Value>,
}

impl WebsiteDocument {
    /// Read and parse a UTF-8 JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// has no identifier.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let value: Value = serde_json::from_str(&text)?;
        Self::from_value(value)
    }

    /// Extract the identifier from a parsed document.
    ///
    /// The identifier is a non-empty string under `websiteId`, falling back
    /// to `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteUpdateError::MissingIdentifier`] if the document is not
    /// an object or carries no usable identifier.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(SiteUpdateError::MissingIdentifier);
        };

        let identifier = [IDENTIFIER_FIELD, IDENTIFIER_ALIAS]
            .iter()
            .find_map(|key| {
                fields
                    .get(*key)
                    .and_then(Value::as_str)
                    .filter(|id| !id.is_empty())
            })
            .map(str::to_string)
            .ok_or(SiteUpdateError::MissingIdentifier)?;

        Ok(Self { identifier, fields })
    }
}
