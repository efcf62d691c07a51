//! Records library
//!
//! Bidirectional mapping between typed records and CSV-style tables.
//!
//! # Features
//!
//! - Tag-driven columns: `#[csv("name")]` maps a field to a column, untagged
//!   fields stay out of the table
//! - Name-based decoding: columns are matched to fields by header name, so
//!   column order in the input does not matter
//! - Best-effort conversion: bad fields are reported, every other value is
//!   still converted
//! - Runtime schemas: YAML-described record shapes for data whose type is not
//!   known at compile time
//!
//! # Crates
//!
//! - `records_types` - kinds, values, descriptors, record traits, errors
//! - `records_derive` - `#[derive(Entry)]`
//! - `records_codec` - header derivation, value coercion, marshal/unmarshal
//!
//! # Example
//!
//! ```rust
//! use records::{marshal, unmarshal, Entry};
//!
//! #[derive(Debug, Default, PartialEq, Entry)]
//! struct Person {
//!     age: i32,
//!     #[csv("name")]
//!     name: String,
//!     #[csv("isEmployee")]
//!     is_employee: bool,
//! }
//!
//! let people = vec![Person { age: 20, name: "john".into(), is_employee: false }];
//! let table = marshal(&people).into_result().unwrap();
//! assert_eq!(table, vec![vec!["name", "isEmployee"], vec!["john", "false"]]);
//!
//! let mut decoded: Vec<Person> = Vec::new();
//! unmarshal(&table, &mut decoded).unwrap().into_result().unwrap();
//! assert_eq!(decoded[0].name, "john");
//! ```

// Lets `#[derive(Entry)]` output resolve inside this crate too.
extern crate self as records;

pub mod config;
pub mod table_io;

pub use records_codec::{
    decode_entry, decode_value, encode_entry, encode_value, format_float, header, marshal,
    marshal_dynamic, marshal_records, parse_bool, unmarshal, unmarshal_dynamic,
    unmarshal_records, ColumnIndex, Conversion, Failure, Report,
};
pub use records_derive::Entry;
pub use records_types::{
    DynamicRecord, Entry, EntryDescriptor, ErrorKind, FieldDescriptor, FieldKind, FieldValue,
    FloatWidth, FromFieldValue, IntWidth, ParseError, Record, RecordError, Row, SchemaError,
    Table, UnknownKind, ValueError,
};

pub use config::TableOptions;
pub use table_io::{
    read_entries, read_table, read_table_from, write_entries, write_table, write_table_to,
    TableIoError,
};
