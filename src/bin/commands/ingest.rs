use std::io::{self as stdio, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use molshelf::FileRegistry;
use molshelf::ingest::{Candidate, IngestConfig, Ingestor};

use crate::commands::{self, format_size, print_boxed_label, run_with_spinner};

/// Runs a batch of files through the ingestion pipeline. Each file is
/// gated and processed independently; one rejection never aborts the run.
#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Structure files to ingest.
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,
}

pub fn run(config: &IngestConfig, args: &IngestArgs) -> Result<()> {
    let mut read_failures: Vec<(String, anyhow::Error)> = Vec::new();
    let mut candidates: Vec<Candidate> = Vec::new();
    for path in &args.files {
        match commands::candidate_from_path(path) {
            Ok(candidate) => candidates.push(candidate),
            Err(error) => read_failures.push((path.display().to_string(), error)),
        }
    }

    let mut ingestor = Ingestor::new(config.clone());
    let mut registry = FileRegistry::new();

    let outcome = run_with_spinner("Ingesting structures", || {
        Ok(ingestor.ingest_batch(&mut registry, candidates))
    })?;

    let mut stderr = stdio::stderr().lock();

    print_boxed_label(&mut stderr, "Ingestion Report")?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row![
        "File",
        "Size",
        "Format",
        "Status",
        "Coordinates",
        "Outcome"
    ]);

    for file_outcome in &outcome.outcomes {
        match &file_outcome.result {
            Ok(id) => {
                let record = registry
                    .find_by_id(*id)
                    .context("Registered record not found")?;
                table.add_row(row![
                    record.name,
                    format_size(record.size_bytes),
                    record.format,
                    record.status(),
                    record.report.coordinate_count(),
                    "registered"
                ]);
            }
            Err(error) => {
                table.add_row(row![file_outcome.name, "-", "-", "-", "-", error]);
            }
        }
    }
    for (name, error) in &read_failures {
        table.add_row(row![name, "-", "-", "-", "-", error]);
    }

    table
        .print(&mut stderr)
        .context("Failed to render ingestion table")?;
    writeln!(&mut stderr, "{}", outcome.summary())?;

    Ok(())
}
