//! Authenticated session passed to every fetch.
//!
//! ## Security
//!
//! The access token is redacted in Debug output.

use crate::DEFAULT_API_VERSION;

/// An authenticated context against one Salesforce org.
///
/// A session is a plain value: it is created once per run and handed by
/// reference to each fetch. Nothing in this workspace keeps a session in
/// global state.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Session {
    /// Create a session for the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Set the API version (e.g., "50.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into().trim_start_matches('v').to_string();
        self
    }

    /// Get the instance URL (the base endpoint all locators resolve against).
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns true if both the instance URL and the token are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.instance_url.is_empty() && !self.access_token.is_empty()
    }

    /// Resolve a resource locator against the instance URL.
    ///
    /// Absolute `http(s)://` locators are accepted only when they point at
    /// the instance URL itself; any other origin returns `None` so the
    /// access token never leaves the org.
    pub fn url(&self, locator: &str) -> Option<String> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            let base = self.instance_url.as_str();
            let same_origin = locator
                .get(..base.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(base))
                && matches!(locator.as_bytes().get(base.len()), None | Some(b'/'));
            same_origin.then(|| locator.to_string())
        } else if locator.starts_with('/') {
            Some(format!("{}{}", self.instance_url, locator))
        } else {
            Some(format!("{}/{}", self.instance_url, locator))
        }
    }

    /// Build the REST API URL for a path.
    ///
    /// Example: `rest_url("sobjects/Account/describe/layouts")` ->
    /// `{instance}/services/data/v50.0/sobjects/Account/describe/layouts`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/v{}/{}",
            self.instance_url, self.api_version, path
        )
    }
}
