//! Per-call options for update operations.

/// Options recognized by [`UpdateClient::update`](crate::UpdateClient::update)
/// and [`UpdateClient::update_from_file`](crate::UpdateClient::update_from_file).
///
/// # Example
///
/// ```
/// use siteupdate::UpdateOptions;
///
/// let options = UpdateOptions::default()
///     .with_send_notification(false)
///     .with_endpoint_override("https://staging.example.com/");
/// assert!(!options.send_notification);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Ask the remote service to send a notification. Defaults to `true`.
    pub send_notification: bool,

    /// Base URL that takes precedence over every other endpoint source.
    pub endpoint_override: Option<String>,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            send_notification: true,
            endpoint_override: None,
        }
    }
}

impl UpdateOptions {
    /// Set whether the remote service should send a notification.
    pub fn with_send_notification(mut self, send: bool) -> Self {
        self.send_notification = send;
        self
    }

    /// Set the endpoint override.
    pub fn with_endpoint_override(mut self, base_url: impl Into<String>) -> Self {
        self.endpoint_override = Some(base_url.into());
        self
    }
}
