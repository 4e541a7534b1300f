use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use molshelf::FileRegistry;
use molshelf::ingest::{IngestConfig, Ingestor};

use crate::commands::{self, run_with_spinner};

/// Validates a single structure file and reports its summary statistics.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input file path. When omitted, stdin is used and treated as PDB.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

pub fn run(config: &IngestConfig, args: &CheckArgs) -> Result<()> {
    let candidate = match &args.input {
        Some(path) => commands::candidate_from_path(path)?,
        None => commands::candidate_from_stdin("stdin.pdb")?,
    };

    let mut ingestor = Ingestor::new(config.clone());
    let mut registry = FileRegistry::new();

    let id = run_with_spinner("Validating structure", || {
        Ok(ingestor.ingest(&mut registry, candidate)?)
    })?;

    let record = registry
        .find_by_id(id)
        .context("Registered record not found")?;
    commands::print_report(record)?;
    Ok(())
}
