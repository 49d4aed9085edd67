//! # sf-layouts-client
//!
//! Session and HTTP transport shared by the layout exporter crates.
//!
//! This crate provides:
//! - [`Session`]: the authenticated context (instance URL + access token)
//!   that every fetch receives explicitly
//! - [`SfHttpClient`]: a single-attempt JSON GET transport with bearer auth
//! - [`ClientConfig`]: transport timeouts, user agent, compression
//! - [`security`]: validation for names that end up in URLs or file paths
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 sf-layouts-core                             │
//! │  (describe layouts, layout detail, flatten, emit)           │
//! └─────────────────────────────────────────────────────────────┘
//!               │ &Session                 │ url
//!               ▼                          ▼
//! ┌──────────────────────────┐  ┌───────────────────────────────┐
//! │        Session           │  │         SfHttpClient          │
//! │  - instance URL, token   │  │  - GET + bearer auth          │
//! │  - URL resolution        │  │  - status / JSON error mapping│
//! └──────────────────────────┘  └───────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_layouts_client::{ClientConfig, Session, SfHttpClient};
//!
//! let session = Session::new("https://myorg.my.salesforce.com", "00D...");
//! let http = SfHttpClient::new(ClientConfig::default())?;
//!
//! let layouts: serde_json::Value = http
//!     .get_json(&session.rest_url("sobjects/Account/describe/layouts"), session.access_token())
//!     .await?;
//! ```

mod client;
mod config;
mod error;
pub mod security;
mod session;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use session::Session;

/// Default Salesforce API version.
pub const DEFAULT_API_VERSION: &str = "50.0";

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("sf-layouts/", env!("CARGO_PKG_VERSION"));
