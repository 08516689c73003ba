//! Mock server state management.
//!
//! Provides the in-memory data store for the mock update-website server.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// A notification the mock service "sent" after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    /// Website the notification was about.
    pub website_id: String,
    /// Keys that were updated, sorted.
    pub changed_fields: Vec<String>,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Website records indexed by `websiteId`.
    pub websites: HashMap<String, Map<String, Value>>,

    /// Notifications sent, in order.
    pub notifications: Vec<SentNotification>,

    /// Number of update requests received, including rejected ones.
    pub update_requests: usize,

    /// When set, every update is answered with this status and an empty body.
    pub forced_status: Option<u16>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a website record to the state.
    ///
    /// The record's `websiteId` field is set to `website_id`.
    pub fn with_website(mut self, website_id: &str, mut record: Map<String, Value>) -> Self {
        record.insert("websiteId".to_string(), Value::from(website_id));
        self.websites.insert(website_id.to_string(), record);
        self
    }

    /// Answer every update with `status` and an empty body.
    pub fn with_forced_status(mut self, status: u16) -> Self {
        self.forced_status = Some(status);
        self
    }

    /// Get a website by identifier.
    pub fn get_website(&self, website_id: &str) -> Option<&Map<String, Value>> {
        self.websites.get(website_id)
    }

    /// Shallow-merge `updates` into a website and return the updated record.
    ///
    /// Keys present in `updates` overwrite, keys absent are untouched. The
    /// stored `websiteId` is never changed. `updated_at` is recorded as
    /// `updatedAt`. Returns `None` for an unknown website.
    pub fn update_website(
        &mut self,
        website_id: &str,
        updates: &Map<String, Value>,
        updated_at: &str,
    ) -> Option<&Map<String, Value>> {
        let record = self.websites.get_mut(website_id)?;
        for (key, value) in updates {
            if key != "websiteId" {
                record.insert(key.clone(), value.clone());
            }
        }
        record.insert("updatedAt".to_string(), Value::from(updated_at));
        self.websites.get(website_id)
    }

    /// Record a notification for `website_id`.
    pub fn notify(&mut self, website_id: &str, updates: &Map<String, Value>) {
        let mut changed_fields: Vec<String> = updates.keys().cloned().collect();
        changed_fields.sort();
        self.notifications.push(SentNotification {
            website_id: website_id.to_string(),
            changed_fields,
        });
    }
}
