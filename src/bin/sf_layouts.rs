//! Export the page layout fields of one SObject, one spreadsheet per record type.
//!
//! ```sh
//! sf-layouts --sobject Account --target-org my-org
//! # or, with SF_INSTANCE_URL / SF_ACCESS_TOKEN exported:
//! sf-layouts --sobject Case --output-dir audit
//! ```
//!
//! Files land in `<output-dir>/<sobject>/<recordTypeDeveloperName>.xlsx`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sf_layouts::{Extractor, LayoutClient, SessionSource, XlsxEmitter};
use sf_layouts_core::{DEFAULT_OUTPUT_DIR, DEFAULT_SHEET_NAME};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sf-layouts", version)]
#[command(
    about = "Export Salesforce page layout fields to one .xlsx per record type",
    long_about = None
)]
struct Cli {
    /// Object API name, e.g. Account or Custom_Object__c
    #[arg(short = 's', long = "sobject", visible_alias = "ob")]
    sobject: String,

    /// Org alias or username authenticated with the sf CLI
    /// (without it, SF_INSTANCE_URL and SF_ACCESS_TOKEN are used)
    #[arg(short = 'o', long = "target-org")]
    target_org: Option<String>,

    /// Directory that receives one sub-directory per object
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// REST API version, e.g. 50.0
    #[arg(long)]
    api_version: Option<String>,

    /// Worksheet name used in every file
    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    sheet_name: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the record type loop stopped early.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let source = match cli.target_org {
        Some(alias) => SessionSource::SfdxAlias(alias),
        None => SessionSource::Env,
    };

    let mut session = source.resolve().await.with_context(|| match &source {
        SessionSource::SfdxAlias(alias) => format!("could not resolve a session for org '{alias}'"),
        SessionSource::Env => {
            "no --target-org given and no session in the environment".to_string()
        }
    })?;
    if let Some(version) = cli.api_version {
        session = session.with_api_version(version);
    }

    let client = LayoutClient::new().context("could not build the HTTP client")?;
    let emitter = XlsxEmitter::new().with_sheet_name(cli.sheet_name);
    let extractor = Extractor::with_emitter(client, emitter);

    let report = extractor
        .run(&session, &cli.sobject, &cli.output_dir)
        .await
        .with_context(|| format!("could not extract layouts for {}", cli.sobject))?;

    match &report.failure {
        None => {
            println!(
                "{} layout file(s) written for {}",
                report.files_written(),
                report.sobject
            );
            Ok(true)
        }
        Some(failure) => {
            eprintln!(
                "Error: record type {} failed: {}",
                failure.developer_name, failure.error
            );
            eprintln!(
                "{} layout file(s) written for {} before the failure; remaining record types were skipped",
                report.files_written(),
                report.sobject
            );
            Ok(false)
        }
    }
}
