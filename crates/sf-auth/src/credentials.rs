//! Session resolution from the SF CLI or the environment.

use serde::Deserialize;
use sf_layouts_client::Session;
use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};

/// Where the session for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSource {
    /// An org alias or username already authenticated with the `sf` CLI.
    SfdxAlias(String),
    /// `SF_INSTANCE_URL` / `SF_ACCESS_TOKEN` (or the `SALESFORCE_*` names).
    Env,
}

impl SessionSource {
    /// Resolve the session.
    pub async fn resolve(&self) -> Result<Session> {
        match self {
            SessionSource::SfdxAlias(alias) => from_sfdx_alias(alias).await,
            SessionSource::Env => from_env(),
        }
    }
}

/// Load a session from environment variables.
///
/// Required:
/// - `SF_INSTANCE_URL` or `SALESFORCE_INSTANCE_URL`
/// - `SF_ACCESS_TOKEN` or `SALESFORCE_ACCESS_TOKEN`
///
/// Optional:
/// - `SF_API_VERSION` or `SALESFORCE_API_VERSION`
pub fn from_env() -> Result<Session> {
    from_env_vars(|name| std::env::var(name).ok())
}

/// Load a session through an arbitrary variable lookup.
pub fn from_env_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Session> {
    let var = |primary: &str, fallback: &str| {
        lookup(primary)
            .filter(|v| !v.is_empty())
            .or_else(|| lookup(fallback).filter(|v| !v.is_empty()))
    };

    let instance_url = var("SF_INSTANCE_URL", "SALESFORCE_INSTANCE_URL")
        .ok_or_else(|| Error::new(ErrorKind::EnvVar("SF_INSTANCE_URL".to_string())))?;
    let access_token = var("SF_ACCESS_TOKEN", "SALESFORCE_ACCESS_TOKEN")
        .ok_or_else(|| Error::new(ErrorKind::EnvVar("SF_ACCESS_TOKEN".to_string())))?;

    let mut session = Session::new(instance_url, access_token);
    if let Some(version) = var("SF_API_VERSION", "SALESFORCE_API_VERSION") {
        session = session.with_api_version(version);
    }
    Ok(session)
}

/// Load a session from the SF CLI using an org alias or username.
///
/// Runs `sf org display --target-org <alias> --json`. Requires the `sf` CLI
/// to be installed and the org to be authenticated.
#[instrument]
pub async fn from_sfdx_alias(alias_or_username: &str) -> Result<Session> {
    use tokio::process::Command;

    if alias_or_username.is_empty() {
        return Err(Error::new(ErrorKind::SfdxCli(
            "org alias must not be empty".to_string(),
        )));
    }

    let output = Command::new("sf")
        .args([
            "org",
            "display",
            "--target-org",
            alias_or_username,
            "--json",
        ])
        .output()
        .await
        .map_err(|e| {
            Error::with_source(
                ErrorKind::SfdxCli(format!("Failed to run sf CLI: {}", e)),
                e,
            )
        })?;

    debug!(status = ?output.status, "sf org display finished");

    if !output.status.success() {
        // The CLI reports failures as JSON on stdout when --json is given.
        let reason = serde_json::from_slice::<OrgDisplayFailure>(&output.stdout)
            .ok()
            .and_then(|f| f.message)
            .unwrap_or_else(|| String::from_utf8_lossy(&output.stderr).trim().to_string());
        return Err(Error::new(ErrorKind::SfdxCli(format!(
            "sf org display failed: {}",
            reason
        ))));
    }

    parse_org_display(&output.stdout)
}

#[derive(Debug, Deserialize)]
struct OrgDisplay {
    result: Option<OrgDisplayResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrgDisplayResult {
    instance_url: Option<String>,
    access_token: Option<String>,
    api_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrgDisplayFailure {
    message: Option<String>,
}

/// Parse the stdout of `sf org display --json` into a session.
pub fn parse_org_display(stdout: &[u8]) -> Result<Session> {
    let display: OrgDisplay = serde_json::from_slice(stdout)?;

    let result = display.result.ok_or_else(|| {
        Error::new(ErrorKind::SfdxCli("Missing 'result' in output".to_string()))
    })?;

    let instance_url = result
        .instance_url
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::new(ErrorKind::SfdxCli("Missing instanceUrl".to_string())))?;

    let access_token = result
        .access_token
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::new(ErrorKind::SfdxCli("Missing accessToken".to_string())))?;

    let mut session = Session::new(instance_url, access_token);
    if let Some(version) = result.api_version.filter(|v| !v.is_empty()) {
        session = session.with_api_version(version);
    }

    if !session.is_valid() {
        return Err(Error::new(ErrorKind::InvalidCredentials(
            "instance URL or access token is empty".to_string(),
        )));
    }
    Ok(session)
}
