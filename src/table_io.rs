//! Reading and writing tables as delimited text.
//!
//! Rows are read without header interpretation: the first line becomes row 0
//! of the table and the codec treats it as the header. Rows may have varying
//! lengths, which lets short rows reach the codec and surface as
//! `IndexOutOfRange` instead of a reader error.

use std::io::{Read, Write};
use std::path::Path;

use records_codec::{marshal, unmarshal, Conversion, Report};
use records_types::{Entry, RecordError, Table};
use thiserror::Error;
use tracing::debug;

use crate::config::TableOptions;

/// Errors from table I/O.
#[derive(Error, Debug)]
pub enum TableIoError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The table could not be mapped at all.
    #[error("Record error: {0}")]
    Records(#[from] RecordError),
}

/// Read a whole file into a table.
pub fn read_table<P: AsRef<Path>>(path: P, options: &TableOptions) -> Result<Table, TableIoError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let table = read_table_from(file, options)?;
    debug!("Read {} rows from {path:?}", table.len());
    Ok(table)
}

/// Read a table from any reader.
pub fn read_table_from<R: Read>(reader: R, options: &TableOptions) -> Result<Table, TableIoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut table = Vec::new();
    for result in reader.records() {
        let record = result?;
        table.push(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}

/// Write a table to a file, replacing its contents.
pub fn write_table<P, S>(path: P, rows: &[Vec<S>], options: &TableOptions) -> Result<(), TableIoError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_table_to(file, rows, options)?;
    debug!("Wrote {} rows to {path:?}", rows.len());
    Ok(())
}

/// Write a table to any writer.
pub fn write_table_to<W, S>(writer: W, rows: &[Vec<S>], options: &TableOptions) -> Result<(), TableIoError>
where
    W: Write,
    S: AsRef<str>,
{
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .delimiter(options.delimiter)
        .from_writer(writer);

    for row in rows {
        writer.write_record(row.iter().map(|field| field.as_ref()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a file and decode every data row into an entry.
///
/// Per-field failures are returned in the report alongside the entries; only
/// I/O problems and a table without a header row are errors.
pub fn read_entries<T: Entry, P: AsRef<Path>>(
    path: P,
    options: &TableOptions,
) -> Result<Conversion<Vec<T>>, TableIoError> {
    let table = read_table(path, options)?;
    let mut entries = Vec::new();
    let report = unmarshal(&table, &mut entries)?;
    Ok(Conversion {
        output: entries,
        report,
    })
}

/// Encode entries and write them to a file.
///
/// The file is written even when some fields failed to encode; those cells
/// are left empty and listed in the returned report.
pub fn write_entries<T: Entry, P: AsRef<Path>>(
    path: P,
    entries: &[T],
    options: &TableOptions,
) -> Result<Report, TableIoError> {
    let (table, report) = marshal(entries).into_parts();
    write_table(path, &table, options)?;
    Ok(report)
}
