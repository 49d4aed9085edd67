//! # sf-layouts-auth
//!
//! Resolves an authenticated [`Session`] for the layout exporter.
//!
//! Acquiring tokens is not done here: an org that is already authenticated
//! with the Salesforce CLI is read back with `sf org display --json`, or the
//! instance URL and token are taken from environment variables.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output of [`Session`]
//! - Error messages never include token values
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_layouts_auth::SessionSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sf_layouts_auth::Error> {
//!     // From an SF CLI alias
//!     let session = SessionSource::SfdxAlias("my-org".into()).resolve().await?;
//!
//!     // From SF_INSTANCE_URL / SF_ACCESS_TOKEN
//!     let session = SessionSource::Env.resolve().await?;
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{from_env, from_env_vars, from_sfdx_alias, parse_org_display, SessionSource};
pub use error::{Error, ErrorKind, Result};
pub use sf_layouts_client::Session;
