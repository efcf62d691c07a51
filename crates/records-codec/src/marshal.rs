//! Collection-level conversion between records and tables.
//!
//! `marshal` turns entries into a table whose row 0 is the header derived
//! from the entry type. `unmarshal` reads row 0 as the header, matches
//! columns to fields by name, and builds one entry per data row.
//!
//! Both directions are best-effort: per-field failures go into a [`Report`]
//! and processing continues, so every row that could be produced is
//! produced. Only an unusable top-level argument (`InvalidInputShape`) stops
//! a call before it starts.

use records_types::{
    DynamicRecord, Entry, EntryDescriptor, FieldDescriptor, ParseError, Record, RecordError, Row,
    Table,
};
use tracing::{debug, trace};

use crate::columns::{header, ColumnIndex};
use crate::forward::encode_value;
use crate::report::{Conversion, Report};
use crate::reverse::decode_value;

/// Encode entries into a table: header row first, then one row per entry.
pub fn marshal<T: Entry>(entries: &[T]) -> Conversion<Table> {
    marshal_records(T::descriptor(), entries)
}

/// Encode records described by `descriptor` into a table.
pub fn marshal_records<R: Record>(descriptor: &EntryDescriptor, records: &[R]) -> Conversion<Table> {
    let mut table = Vec::with_capacity(records.len() + 1);
    let mut report = Report::new();

    table.push(header(descriptor));
    for (offset, record) in records.iter().enumerate() {
        table.push(encode_entry(descriptor, record, offset + 1, &mut report));
    }

    debug!(
        "Marshaled {} '{}' entries with {} failures",
        records.len(),
        descriptor.name,
        report.len()
    );

    Conversion {
        output: table,
        report,
    }
}

/// Encode dynamic records, checking every record has one value per field and
/// that each value matches its field's kind.
pub fn marshal_dynamic(
    descriptor: &EntryDescriptor,
    records: &[DynamicRecord],
) -> Result<Conversion<Table>, RecordError> {
    if let Some((position, record)) = records
        .iter()
        .enumerate()
        .find(|(_, record)| record.len() != descriptor.len())
    {
        return Err(RecordError::invalid_shape(format!(
            "record {position} has {} values but '{}' declares {} fields",
            record.len(),
            descriptor.name,
            descriptor.len()
        )));
    }

    for (position, record) in records.iter().enumerate() {
        for (field, value) in descriptor.fields.iter().zip(record.values()) {
            if field.kind.is_supported()
                && std::mem::discriminant(value) != std::mem::discriminant(&field.kind.zero_value())
            {
                return Err(RecordError::invalid_shape(format!(
                    "record {position} holds a {} value for field '{}' of kind '{}'",
                    value.kind_name(),
                    field.name,
                    field.kind
                )));
            }
        }
    }

    Ok(marshal_records(descriptor, records))
}

/// Encode one record into one row.
///
/// The row has exactly one field per annotated field of `descriptor`. A field
/// that cannot be coerced leaves an empty placeholder and a failure recorded
/// against `row`.
pub fn encode_entry<R: Record + ?Sized>(
    descriptor: &EntryDescriptor,
    record: &R,
    row: usize,
    report: &mut Report,
) -> Row {
    let mut out = Vec::with_capacity(descriptor.len());

    for (position, field) in descriptor.included() {
        match encode_value(field.kind, &record.field_value(position)) {
            Some(text) => out.push(text),
            None => {
                let error = unsupported(field);
                trace!("Row {row}: {error}");
                report.record(row, error);
                out.push(String::new());
            }
        }
    }

    out
}

/// Decode a table into entries, appending one entry per data row to `out`.
///
/// Fails with `InvalidInputShape` (leaving `out` untouched) when the table
/// has no header row.
pub fn unmarshal<T: Entry, S: AsRef<str>>(
    rows: &[Vec<S>],
    out: &mut Vec<T>,
) -> Result<Report, RecordError> {
    unmarshal_records(T::descriptor(), rows, out, T::default)
}

/// Decode a table into dynamic records shaped by `descriptor`.
pub fn unmarshal_dynamic<S: AsRef<str>>(
    descriptor: &EntryDescriptor,
    rows: &[Vec<S>],
    out: &mut Vec<DynamicRecord>,
) -> Result<Report, RecordError> {
    unmarshal_records(descriptor, rows, out, || DynamicRecord::zeroed(descriptor))
}

/// Decode a table into records created by `make`.
///
/// `make` must return a zero-valued record matching `descriptor`.
pub fn unmarshal_records<R, S, F>(
    descriptor: &EntryDescriptor,
    rows: &[Vec<S>],
    out: &mut Vec<R>,
    mut make: F,
) -> Result<Report, RecordError>
where
    R: Record,
    S: AsRef<str>,
    F: FnMut() -> R,
{
    let (header, data) = rows
        .split_first()
        .ok_or_else(|| RecordError::invalid_shape("table has no header row"))?;

    let columns = ColumnIndex::from_header(header);
    let mut report = Report::new();

    out.reserve(data.len());
    for (offset, row) in data.iter().enumerate() {
        let mut record = make();
        decode_entry(descriptor, &columns, row, &mut record, offset + 1, &mut report);
        out.push(record);
    }

    debug!(
        "Unmarshaled {} '{}' entries with {} failures",
        data.len(),
        descriptor.name,
        report.len()
    );

    Ok(report)
}

/// Decode one row into `record`.
///
/// Fields whose column is absent from the header keep their current value,
/// as do read-only fields. Failures are recorded against `row`; fields
/// already assigned stay assigned.
pub fn decode_entry<R: Record + ?Sized, S: AsRef<str>>(
    descriptor: &EntryDescriptor,
    columns: &ColumnIndex,
    fields: &[S],
    record: &mut R,
    row: usize,
    report: &mut Report,
) {
    for (position, field) in descriptor.included() {
        let Some(column) = field.column.as_deref() else {
            continue;
        };
        let Some(at) = columns.position(column) else {
            continue;
        };
        if !field.writable {
            continue;
        }

        if let Err(error) = decode_field(field, position, column, at, fields, record) {
            trace!("Row {row}: {error}");
            report.record(row, error);
        }
    }
}

fn decode_field<R: Record + ?Sized, S: AsRef<str>>(
    field: &FieldDescriptor,
    position: usize,
    column: &str,
    at: usize,
    fields: &[S],
    record: &mut R,
) -> Result<(), RecordError> {
    if !field.kind.is_supported() {
        return Err(unsupported(field));
    }

    let text = fields
        .get(at)
        .ok_or_else(|| RecordError::IndexOutOfRange {
            field: field.name.clone(),
            column: column.to_string(),
            position: at,
            row_len: fields.len(),
        })?
        .as_ref();

    let parse_failure = |source: ParseError| RecordError::ParseFailure {
        field: field.name.clone(),
        kind: field.kind,
        value: text.to_string(),
        source,
    };

    let value = decode_value(field.kind, text).map_err(parse_failure)?;
    record
        .set_field_value(position, value)
        .map_err(|e| parse_failure(e.into()))
}

fn unsupported(field: &FieldDescriptor) -> RecordError {
    RecordError::UnsupportedKind {
        field: field.name.clone(),
        kind: field.kind,
    }
}
