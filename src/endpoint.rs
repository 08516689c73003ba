//! Endpoint resolution for the update-website operation.
//!
//! The base URL comes from an explicit strategy value; nothing here reads
//! the environment.

/// Path of the update-website operation on the remote service.
pub const UPDATE_WEBSITE_PATH: &str = "/api/update-website";

/// Where the update-website endpoint comes from.
///
/// Use [`EndpointResolver::select`] to apply the standard precedence:
/// override, then ambient origin, then configured base URL, then the bare
/// relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointResolver {
    /// Caller-supplied base URL. A trailing slash is stripped.
    Override(String),
    /// Origin of the hosting context (e.g. the page a browser is showing).
    AmbientOrigin(String),
    /// Base URL from process-wide configuration.
    ConfiguredBase(String),
    /// No base known; the relative path is left to the transport.
    RelativeDefault,
}

impl EndpointResolver {
    /// Pick a strategy; the first present source wins.
    pub fn select(
        endpoint_override: Option<&str>,
        ambient_origin: Option<&str>,
        configured_base: Option<&str>,
    ) -> Self {
        if let Some(base) = endpoint_override {
            return Self::Override(base.to_string());
        }
        if let Some(origin) = ambient_origin {
            return Self::AmbientOrigin(origin.to_string());
        }
        if let Some(base) = configured_base {
            return Self::ConfiguredBase(base.to_string());
        }
        Self::RelativeDefault
    }

    /// The full endpoint URL for this strategy.
    pub fn endpoint(&self) -> String {
        match self {
            Self::Override(base) => format!("{}{UPDATE_WEBSITE_PATH}", strip_trailing_slash(base)),
            Self::AmbientOrigin(origin) => format!("{origin}{UPDATE_WEBSITE_PATH}"),
            Self::ConfiguredBase(base) => format!("{base}{UPDATE_WEBSITE_PATH}"),
            Self::RelativeDefault => UPDATE_WEBSITE_PATH.to_string(),
        }
    }

    /// Short name of the strategy, for logs.
    pub fn source(&self) -> &'static str {
        match self {
            Self::Override(_) => "override",
            Self::AmbientOrigin(_) => "ambient-origin",
            Self::ConfiguredBase(_) => "configured-base",
            Self::RelativeDefault => "relative-default",
        }
    }
}

fn strip_trailing_slash(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}
