//! Core types for the records tabular mapper.
//!
//! This crate provides the data model shared by the derive macro, the row
//! codec and the command-line tool:
//!
//! - [`FieldKind`] - coercion-relevant classification of a field's type
//! - [`FieldValue`] - kind-tagged value moved between records and text
//! - [`FieldDescriptor`] / [`EntryDescriptor`] - static metadata of one record shape
//! - [`Record`] / [`Entry`] - positional field access implemented by record types
//! - [`DynamicRecord`] - record backed by a runtime descriptor (YAML schema)
//! - [`RecordError`] - error taxonomy reported by marshal and unmarshal
//!
//! # Architecture
//!
//! ```text
//! records-types (this crate)
//!    │
//!    ├─── records-derive  (generates Entry/Record impls from #[csv("...")] tags)
//!    └─── records-codec   (header derivation, value coercion, marshal/unmarshal)
//! ```
//!
//! # Example
//!
//! ```rust
//! use records_types::{EntryDescriptor, FieldDescriptor, FieldKind, IntWidth};
//!
//! let descriptor = EntryDescriptor::new(
//!     "Person",
//!     vec![
//!         FieldDescriptor::new("age", FieldKind::Int(IntWidth::W32)),
//!         FieldDescriptor::new("name", FieldKind::Text).with_column("name"),
//!     ],
//! );
//!
//! assert_eq!(descriptor.columns().collect::<Vec<_>>(), vec!["name"]);
//! ```

pub mod descriptor;
pub mod entry;
pub mod error;
pub mod kind;
pub mod value;

pub use descriptor::{EntryDescriptor, FieldDescriptor};
pub use entry::{DynamicRecord, Entry, Record};
pub use error::{ErrorKind, ParseError, RecordError, SchemaError, ValueError};
pub use kind::{FieldKind, FloatWidth, IntWidth, UnknownKind};
pub use value::{FieldValue, FromFieldValue};

/// One row of text fields.
pub type Row = Vec<String>;

/// Ordered rows of text fields; row 0 is the header of column names.
pub type Table = Vec<Row>;
