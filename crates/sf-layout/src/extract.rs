//! Per-record-type extraction run.
//!
//! A run fetches the describe result once, then for each record type, in
//! listed order and one at a time: fetch the layout, flatten it, and write
//! `<output_dir>/<sobject>/<developerName>.xlsx`.
//!
//! The record type loop has a single failure boundary. The first fetch,
//! decode, or write failure stops the loop; files already written stay on
//! disk and are listed in the [`ExtractionReport`] together with the failure.

use std::path::{Path, PathBuf};

use sf_layouts_client::{security, Session};
use tracing::{error, info, instrument};

use crate::client::LayoutClient;
use crate::emit::{SpreadsheetEmitter, XlsxEmitter};
use crate::error::{Error, ErrorKind, Result};
use crate::flatten::flatten;
use crate::types::RecordTypeMapping;

/// File extension of every output file.
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "layouts";

/// Outcome of a run whose describe step succeeded.
#[derive(Debug)]
pub struct ExtractionReport {
    /// The SObject that was extracted.
    pub sobject: String,
    /// Files written, in record type order.
    pub written: Vec<PathBuf>,
    /// The failure that stopped the loop, if any.
    pub failure: Option<RecordTypeFailure>,
}

impl ExtractionReport {
    /// Number of files written before the run finished or stopped.
    pub fn files_written(&self) -> usize {
        self.written.len()
    }

    /// Returns true if every record type was written.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// The record type whose step failed, and why.
#[derive(Debug)]
pub struct RecordTypeFailure {
    pub developer_name: String,
    pub error: Error,
}

/// Runs the describe → fetch → flatten → emit sequence for one SObject.
#[derive(Debug, Clone)]
pub struct Extractor<E = XlsxEmitter> {
    client: LayoutClient,
    emitter: E,
}

impl Extractor<XlsxEmitter> {
    /// Create an extractor that writes `.xlsx` files.
    pub fn new(client: LayoutClient) -> Self {
        Self::with_emitter(client, XlsxEmitter::new())
    }
}

impl<E: SpreadsheetEmitter> Extractor<E> {
    /// Create an extractor with a custom emitter.
    pub fn with_emitter(client: LayoutClient, emitter: E) -> Self {
        Self { client, emitter }
    }

    /// Extract every record type layout of `sobject` into `output_dir/sobject/`.
    ///
    /// Returns `Err` if the describe call fails or the output directory
    /// cannot be created; nothing is written in that case. Any later
    /// failure is reported in [`ExtractionReport::failure`].
    #[instrument(skip(self, session, output_dir), fields(output_dir = %output_dir.display()))]
    pub async fn run(
        &self,
        session: &Session,
        sobject: &str,
        output_dir: &Path,
    ) -> Result<ExtractionReport> {
        let describe = self.client.describe_layouts(session, sobject).await?;
        info!(
            record_types = describe.record_type_mappings.len(),
            "Describe layouts fetched"
        );

        let target_dir = output_dir.join(sobject);
        tokio::fs::create_dir_all(&target_dir).await.map_err(|e| {
            Error::with_source(
                ErrorKind::Write(format!(
                    "cannot create directory {}: {}",
                    target_dir.display(),
                    e
                )),
                e,
            )
        })?;

        let mut report = ExtractionReport {
            sobject: sobject.to_string(),
            written: Vec::with_capacity(describe.record_type_mappings.len()),
            failure: None,
        };

        for mapping in &describe.record_type_mappings {
            match self.extract_record_type(session, mapping, &target_dir).await {
                Ok(path) => {
                    info!(path = %path.display(), "Excel file has been created");
                    report.written.push(path);
                }
                Err(err) => {
                    error!(
                        record_type = %mapping.developer_name,
                        error = %err,
                        files_written = report.written.len(),
                        "Stopping extraction"
                    );
                    report.failure = Some(RecordTypeFailure {
                        developer_name: mapping.developer_name.clone(),
                        error: err,
                    });
                    break;
                }
            }
        }

        Ok(report)
    }

    async fn extract_record_type(
        &self,
        session: &Session,
        mapping: &RecordTypeMapping,
        target_dir: &Path,
    ) -> Result<PathBuf> {
        let destination = output_path(target_dir, &mapping.developer_name)?;
        let detail = self
            .client
            .layout_detail(session, mapping.layout_locator())
            .await?;
        let records = flatten(&detail);
        self.emitter.emit(&records, &destination)?;
        Ok(destination)
    }
}

/// `<target_dir>/<developer_name>.xlsx`, refusing names that would leave the directory.
fn output_path(target_dir: &Path, developer_name: &str) -> Result<PathBuf> {
    if !security::is_safe_file_stem(developer_name) {
        return Err(Error::new(ErrorKind::Write(format!(
            "record type developer name '{}' is not a valid file name",
            developer_name
        ))));
    }
    Ok(target_dir.join(format!("{}.{}", developer_name, OUTPUT_EXTENSION)))
}
