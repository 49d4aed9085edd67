//! Layout API client.
//!
//! Both fetches take the [`Session`] explicitly; the client itself only owns
//! the HTTP transport.

use sf_layouts_client::{security, ClientConfig, Session, SfHttpClient};
use tracing::{info, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::types::{LayoutDescribeResult, LayoutDetail};

/// Client for the describe-layouts and layout-detail resources.
///
/// # Example
///
/// ```rust,ignore
/// use sf_layouts_core::LayoutClient;
///
/// let client = LayoutClient::new()?;
/// let describe = client.describe_layouts(&session, "Account").await?;
/// for mapping in &describe.record_type_mappings {
///     let detail = client.layout_detail(&session, mapping.layout_locator()).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LayoutClient {
    http: SfHttpClient,
}

impl LayoutClient {
    /// Create a client with the default transport configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom transport configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = SfHttpClient::new(config)?;
        Ok(Self { http })
    }

    /// Create a client from an existing transport.
    pub fn from_http(http: SfHttpClient) -> Self {
        Self { http }
    }

    /// Get the record type → layout mappings for an SObject.
    ///
    /// This is equivalent to calling `/services/data/vXX.0/sobjects/{sobject}/describe/layouts`.
    /// One attempt; a failure status is a fetch error, a body without
    /// `recordTypeMappings` a decode error.
    #[instrument(skip(self, session))]
    pub async fn describe_layouts(
        &self,
        session: &Session,
        sobject: &str,
    ) -> Result<LayoutDescribeResult> {
        if sobject.is_empty() {
            return Err(Error::new(ErrorKind::MissingParameter(
                "object API name".to_string(),
            )));
        }
        require_session(session)?;
        if !security::is_safe_sobject_name(sobject) {
            return Err(Error::new(ErrorKind::InvalidInput(format!(
                "invalid SObject name '{}'",
                sobject
            ))));
        }

        let url = session.rest_url(&format!("sobjects/{}/describe/layouts", sobject));
        info!(url = %url, "Making API call");
        self.http
            .get_json(&url, session.access_token())
            .await
            .map_err(Into::into)
    }

    /// Get one layout by its locator (the `urls.layout` of a record type mapping).
    ///
    /// No caching: two record types sharing a layout fetch it twice.
    /// A locator naming a host other than the session's instance is rejected
    /// with [`ErrorKind::InvalidInput`] before any request is sent.
    #[instrument(skip(self, session))]
    pub async fn layout_detail(
        &self,
        session: &Session,
        layout_locator: &str,
    ) -> Result<LayoutDetail> {
        if layout_locator.is_empty() {
            return Err(Error::new(ErrorKind::MissingParameter(
                "layout locator".to_string(),
            )));
        }
        require_session(session)?;

        let url = session.url(layout_locator).ok_or_else(|| {
            Error::new(ErrorKind::InvalidInput(format!(
                "layout locator '{}' is not on the session's instance",
                layout_locator
            )))
        })?;
        info!(url = %url, "Fetching layout");
        let body: serde_json::Value = self
            .http
            .get_json(&url, session.access_token())
            .await?;
        LayoutDetail::from_json(body)
    }
}

fn require_session(session: &Session) -> Result<()> {
    if session.is_valid() {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::MissingParameter(
            "session instance URL or access token".to_string(),
        )))
    }
}

impl LayoutDetail {
    /// Decode a layout from an arbitrary JSON value.
    ///
    /// A value that is not an object has no sections and decodes to an
    /// empty layout; an object whose nested shape is wrong is a decode error.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(Into::into)
    }
}
