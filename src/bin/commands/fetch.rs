use std::fs;
use std::io::{self as stdio, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use molshelf::FileRegistry;
use molshelf::fetch::{fetch_structure, fetch_url};
use molshelf::ingest::{IngestConfig, Ingestor};

use crate::commands::{self, run_with_spinner};

/// Downloads a structure by database identifier or URL and ingests it.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Four-character structure database identifier.
    #[arg(value_name = "ID", required_unless_present = "url", conflicts_with = "url")]
    id: Option<String>,
    /// Fetch from an arbitrary URL instead of a database identifier.
    #[arg(long, value_name = "URL")]
    url: Option<String>,
    /// Write the downloaded content to this file.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub fn run(config: &IngestConfig, args: &FetchArgs) -> Result<()> {
    let candidate = run_with_spinner("Downloading structure", || match (&args.id, &args.url) {
        (Some(id), _) => Ok(fetch_structure(id)?),
        (None, Some(url)) => Ok(fetch_url(url)?),
        (None, None) => bail!("Provide a structure identifier or --url."),
    })?;

    let bytes = candidate.bytes.clone();
    if let Some(path) = &args.output {
        fs::write(path, &bytes)
            .with_context(|| format!("Failed to write output file {}", path.display()))?;
    } else if !commands::interactive_stdout_requested(None) {
        // stdout is piped: mirror the downloaded content for the next
        // stage while the report goes to stderr.
        stdio::stdout()
            .lock()
            .write_all(&bytes)
            .context("Failed to write downloaded content to stdout")?;
    }

    let name = candidate.name.clone();
    let mut ingestor = Ingestor::new(config.clone());
    let mut registry = FileRegistry::new();
    match ingestor.ingest(&mut registry, candidate) {
        Ok(id) => {
            let record = registry
                .find_by_id(id)
                .context("Registered record not found")?;
            commands::print_report(record)?;
            Ok(())
        }
        Err(error) => bail!("Downloaded file '{name}' was rejected: {error}"),
    }
}
