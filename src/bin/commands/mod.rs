use std::fs;
use std::io::{self as stdio, Read, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use prettytable::{Table, format, row};

use molshelf::FileRecord;
use molshelf::ingest::{Candidate, IngestConfig};

pub mod check;
pub mod fetch;
pub mod ingest;

/// Loads the TOML ingestion policy, falling back to the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<IngestConfig> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            IngestConfig::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        }
        None => Ok(IngestConfig::default()),
    }
}

/// Reads a candidate from a file path.
pub fn candidate_from_path(path: &Path) -> Result<Candidate> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read input file {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Candidate::new(name, bytes))
}

/// Reads a candidate from stdin, refusing an interactive terminal.
pub fn candidate_from_stdin(name: &str) -> Result<Candidate> {
    let stdin = stdio::stdin();
    if stdin.is_terminal() {
        bail!(
            "No --input provided and stdin is a TTY. Provide -i/--input or pipe a structure into molshelf."
        );
    }
    let mut bytes = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(Candidate::new(name, bytes))
}

/// Wraps long-running operations with a spinner rendered to stderr.
pub fn run_with_spinner<T, F>(message: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{} ✓", message)),
        Err(_) => spinner.abandon_with_message(format!("{} ✗", message)),
    }

    result
}

/// Returns true when stdout is a TTY and no explicit output file was
/// supplied.
pub fn interactive_stdout_requested(output: Option<&Path>) -> bool {
    output.is_none() && stdio::stdout().is_terminal()
}

pub fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> stdio::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}

/// Renders a single-record validation report to stderr.
pub fn print_report(record: &FileRecord) -> Result<()> {
    let mut stderr = stdio::stderr().lock();

    print_boxed_label(&mut stderr, "Structure File Report")?;
    writeln!(&mut stderr)?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Metric", "Value"]);
    table.add_row(row!["File", record.name]);
    table.add_row(row!["Format", record.format]);
    table.add_row(row!["Size", format_size(record.size_bytes)]);
    table.add_row(row!["Status", record.status()]);
    table.add_row(row!["Atom records", record.report.atom_count]);
    table.add_row(row!["Heteroatom records", record.report.hetero_atom_count]);
    table.add_row(row!["Chains", record.report.chain_count]);
    table.add_row(row!["Residues", record.report.residue_count]);
    table
        .print(&mut stderr)
        .context("Failed to render report table")?;

    for error in &record.report.errors {
        writeln!(&mut stderr, "error: {error}")?;
    }
    for warning in &record.report.warnings {
        writeln!(&mut stderr, "warning: {warning}")?;
    }

    Ok(())
}

/// Human-readable byte size.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
