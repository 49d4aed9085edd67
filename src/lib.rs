//! # sf-layouts
//!
//! Export Salesforce page layouts to spreadsheets: one `.xlsx` per record
//! type, one row per field component, in on-screen order.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tracing spans skip the session
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **sf-layouts-client** - Session value and single-attempt HTTP transport
//! - **sf-layouts-auth** - Session resolution from the SF CLI or environment
//! - **sf-layouts-core** - Layout types, flattening, spreadsheet output, extraction runs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sf_layouts::{Extractor, LayoutClient, SessionSource};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = SessionSource::SfdxAlias("my-org".into()).resolve().await?;
//!     let extractor = Extractor::new(LayoutClient::new()?);
//!
//!     let report = extractor
//!         .run(&session, "Account", std::path::Path::new("layouts"))
//!         .await?;
//!
//!     for path in &report.written {
//!         println!("{}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use sf_layouts_auth as auth;
pub use sf_layouts_client as client;
pub use sf_layouts_core as layouts;

// Re-export commonly used types at the top level
pub use sf_layouts_auth::SessionSource;
pub use sf_layouts_client::{ClientConfig, Session};
pub use sf_layouts_core::{
    flatten, ExtractionReport, Extractor, FlatFieldRecord, LayoutClient, XlsxEmitter,
};
