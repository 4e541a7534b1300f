use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{check, fetch, ingest};

#[derive(Parser, Debug)]
#[command(
    name = "molshelf",
    about = "A command-line tool for validating, ingesting, and fetching molecular structure files.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// TOML ingestion policy (accepted extensions, size ceiling).
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a single structure file and print its report.
    Check(check::CheckArgs),
    /// Run a batch of files through the pipeline and tabulate outcomes.
    Ingest(ingest::IngestArgs),
    /// Download a structure by identifier or URL and ingest it.
    Fetch(fetch::FetchArgs),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Check(args) => check::run(&config, &args),
        Command::Ingest(args) => ingest::run(&config, &args),
        Command::Fetch(args) => fetch::run(&config, &args),
    }
}
