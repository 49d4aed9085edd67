//! Single-attempt HTTP transport with Salesforce-specific error mapping.

use std::sync::LazyLock;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};

/// HTTP client for Salesforce read requests.
///
/// Each call issues exactly one request. Retrying, if wanted, is left to
/// the caller.
#[derive(Debug, Clone)]
pub struct SfHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SfHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `url` with bearer authentication and decode the JSON body as `T`.
    ///
    /// Non-2xx responses become [`ErrorKind::Status`]; a body that does not
    /// decode as `T` becomes [`ErrorKind::Json`].
    #[instrument(skip(self, bearer_token), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, bearer_token: &str) -> Result<T> {
        if self.config.enable_tracing {
            debug!("Sending request");
        }

        let response = self
            .inner
            .get(url)
            .bearer_auth(bearer_token)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if self.config.enable_tracing {
            let content_length = response.content_length();
            if status.is_success() {
                debug!(status = status.as_u16(), content_length, "Response received");
            } else {
                info!(status = status.as_u16(), content_length, "Non-success response");
            }
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                &body,
            ));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }
}

/// Salesforce error body entry (`[{"message": ..., "errorCode": ...}]`).
#[derive(Debug, Deserialize)]
struct SalesforceErrorResponse {
    message: String,
    #[serde(rename = "errorCode")]
    error_code: String,
}

/// Build a status error, pulling the first Salesforce error out of the body.
fn status_error(status: u16, reason: &str, body: &str) -> Error {
    let first = serde_json::from_str::<Vec<SalesforceErrorResponse>>(body)
        .ok()
        .and_then(|errors| errors.into_iter().next())
        .or_else(|| serde_json::from_str::<SalesforceErrorResponse>(body).ok());

    let detail = match first {
        Some(err) => format!("{} - {}", err.error_code, sanitize_error_message(&err.message)),
        None => sanitize_error_message(body.trim()),
    };

    Error::new(ErrorKind::Status {
        status,
        reason: reason.to_string(),
        detail,
    })
}

// Salesforce access tokens start with the org id prefix "00D" and carry a "!".
static TOKEN_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"00[A-Za-z0-9]{13,}[!][A-Za-z0-9_.]+").expect("valid token pattern")
});

static SESSION_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"sid=[A-Za-z0-9]{20,}").expect("valid session pattern")
});

/// Redact anything that looks like a credential and cap the length.
fn sanitize_error_message(message: &str) -> String {
    const MAX_CHARS: usize = 500;

    let redacted = TOKEN_PATTERN.replace_all(message, "[REDACTED_TOKEN]");
    let redacted = SESSION_PATTERN.replace_all(&redacted, "sid=[REDACTED]");

    if redacted.chars().count() > MAX_CHARS {
        let mut truncated: String = redacted.chars().take(MAX_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        redacted.into_owned()
    }
}
