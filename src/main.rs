//! Command-line interface for records
//!
//! # Usage Examples
//!
//! ## Print the header a schema produces
//! ```bash
//! records header --schema person.yaml
//! ```
//!
//! ## Validate a table against a schema
//! ```bash
//! # Exits non-zero and logs every bad field when anything fails to decode
//! RUST_LOG=info records check --schema person.yaml people.csv
//! ```
//!
//! ## Normalize a table
//! ```bash
//! # Reorders columns to schema order, drops unknown columns and rewrites
//! # values in canonical form (e.g. "T" -> "true", "1.50" -> "1.5")
//! records normalize --schema person.yaml people.csv -o people.clean.csv
//!
//! # Semicolon-separated input
//! records normalize --schema person.yaml --delimiter ';' people.csv
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use records::{
    header, marshal_dynamic, read_table, table_io, unmarshal_dynamic, DynamicRecord,
    EntryDescriptor, Report, TableOptions,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "records")]
#[command(about = "Map CSV tables onto record schemas")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header row a schema produces
    Header {
        /// Record schema (YAML)
        #[arg(long, env = "RECORDS_SCHEMA", value_name = "PATH")]
        schema: PathBuf,

        /// Table format options
        #[command(flatten)]
        options: TableOptions,
    },

    /// Decode a table against a schema and report every failure
    Check {
        /// Record schema (YAML)
        #[arg(long, env = "RECORDS_SCHEMA", value_name = "PATH")]
        schema: PathBuf,

        /// Input table
        input: PathBuf,

        /// Table format options
        #[command(flatten)]
        options: TableOptions,
    },

    /// Decode a table and re-encode it in schema order and canonical form
    Normalize {
        /// Record schema (YAML)
        #[arg(long, env = "RECORDS_SCHEMA", value_name = "PATH")]
        schema: PathBuf,

        /// Input table
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Exit with an error if any field failed, after writing the output
        #[arg(long)]
        strict: bool,

        /// Table format options
        #[command(flatten)]
        options: TableOptions,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Header { schema, options } => {
            let descriptor = load_schema(&schema)?;
            table_io::write_table_to(std::io::stdout().lock(), &[header(&descriptor)], &options)
                .context("Failed to write header")?;
        }
        Commands::Check {
            schema,
            input,
            options,
        } => {
            let descriptor = load_schema(&schema)?;
            let (records, report) = decode(&descriptor, &input, &options)?;
            log_failures(&report);

            if !report.is_clean() {
                anyhow::bail!(
                    "{} failures in {} of {} rows of {input:?}",
                    report.len(),
                    report.failed_rows().len(),
                    records.len()
                );
            }
            info!("{input:?}: {} rows decoded cleanly", records.len());
        }
        Commands::Normalize {
            schema,
            input,
            output,
            strict,
            options,
        } => {
            let descriptor = load_schema(&schema)?;
            let (records, decode_report) = decode(&descriptor, &input, &options)?;
            log_failures(&decode_report);

            let (table, encode_report) = marshal_dynamic(&descriptor, &records)
                .context("Failed to encode records")?
                .into_parts();
            log_failures(&encode_report);

            match &output {
                Some(path) => table_io::write_table(path, &table, &options)
                    .with_context(|| format!("Failed to write table to {path:?}"))?,
                None => table_io::write_table_to(std::io::stdout().lock(), &table, &options)
                    .context("Failed to write table to stdout")?,
            }
            info!("Normalized {} rows from {input:?}", records.len());

            let failures = decode_report.len() + encode_report.len();
            if strict && failures > 0 {
                anyhow::bail!("{failures} fields failed to convert");
            }
        }
    }

    Ok(())
}

fn load_schema(path: &Path) -> anyhow::Result<EntryDescriptor> {
    let descriptor = EntryDescriptor::from_file(path)
        .with_context(|| format!("Failed to load record schema from {path:?}"))?;
    info!(
        "Loaded schema '{}' with {} fields",
        descriptor.name,
        descriptor.len()
    );
    Ok(descriptor)
}

fn decode(
    descriptor: &EntryDescriptor,
    input: &Path,
    options: &TableOptions,
) -> anyhow::Result<(Vec<DynamicRecord>, Report)> {
    let table =
        read_table(input, options).with_context(|| format!("Failed to read table {input:?}"))?;
    let mut records = Vec::new();
    let report = unmarshal_dynamic(descriptor, &table, &mut records)
        .with_context(|| format!("Failed to decode {input:?}"))?;
    Ok((records, report))
}

fn log_failures(report: &Report) {
    for failure in report {
        warn!("Row {}: {}", failure.row, failure.error);
    }
}
