//! # sf-layouts-core
//!
//! Turns Salesforce page layouts into a field inventory, one spreadsheet per
//! record type.
//!
//! ## Pipeline
//!
//! ```text
//! sobject + Session
//!     │
//!     ▼
//! LayoutClient::describe_layouts ──► [(developerName, layout locator), ...]
//!     │ for each, in order, one at a time
//!     ▼
//! LayoutClient::layout_detail ──► LayoutDetail
//!     │
//!     ▼
//! flatten ──► Vec<FlatFieldRecord>   (section → row → item → component)
//!     │
//!     ▼
//! SpreadsheetEmitter::emit ──► <output>/<sobject>/<developerName>.xlsx
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_layouts_core::{Extractor, LayoutClient};
//! use sf_layouts_client::Session;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), sf_layouts_core::Error> {
//!     let session = Session::new("https://myorg.my.salesforce.com", "00D...");
//!     let extractor = Extractor::new(LayoutClient::new()?);
//!
//!     let report = extractor
//!         .run(&session, "Account", std::path::Path::new("layouts"))
//!         .await?;
//!     println!("{} files written", report.files_written());
//!     Ok(())
//! }
//! ```

mod client;
mod emit;
mod error;
mod extract;
mod flatten;
mod types;

pub use client::LayoutClient;
pub use emit::{SpreadsheetEmitter, XlsxEmitter, DEFAULT_SHEET_NAME};
pub use error::{Error, ErrorKind, Result};
pub use extract::{
    ExtractionReport, Extractor, RecordTypeFailure, DEFAULT_OUTPUT_DIR, OUTPUT_EXTENSION,
};
pub use flatten::{flatten, FieldValue, FlatFieldRecord, COLUMNS};
pub use types::{
    FieldDetails, LayoutComponent, LayoutDescribeResult, LayoutDetail, LayoutItem, LayoutRow,
    LayoutSection, RecordTypeMapping, RecordTypeUrls,
};
